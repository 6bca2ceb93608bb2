//! Hand-written scanner for Ibex source text.
//!
//! The lexer is eager: the constructor performs one complete pass over the
//! source and stores the finished token vector before any token can be
//! consumed. Consumption is a cursor over that vector, which is what makes
//! the signed-depth [`Lexer::peek_token`] lookahead (including looking
//! *back* at already-consumed tokens) cheap.
//!
//! Errors never abort the scan. Each one is recorded and scanning resumes
//! with the next unconsumed character; the driver decides what to do with
//! a stream that reported errors.

mod error;

#[cfg(test)]
mod lexer_test;

pub use error::{LexError, LexErrorKind};

use ecow::EcoString;
use tracing::debug;

use crate::token::{Position, Token, TokenKind};

/// Tokenizer over a complete source text.
pub struct Lexer {
    tokens: Vec<Token>,
    errors: Vec<LexError>,
    cursor: usize,
}

impl Lexer {
    /// Scan `source` to completion. The filename is advisory and only used
    /// in diagnostics.
    pub fn new(file: impl Into<EcoString>, source: &str) -> Self {
        let mut scanner = Scanner::new(file.into(), source);
        scanner.scan();
        debug!(
            file = %scanner.file,
            tokens = scanner.tokens.len(),
            errors = scanner.errors.len(),
            "scanned source"
        );
        Self {
            tokens: scanner.tokens,
            errors: scanner.errors,
            cursor: 0,
        }
    }

    /// Number of lexical errors recorded during scanning.
    pub fn errors_reported(&self) -> usize {
        self.errors.len()
    }

    /// The recorded lexical errors, in source order.
    pub fn errors(&self) -> &[LexError] {
        &self.errors
    }

    /// Consume and return the next token. Past the end of the stream this
    /// keeps returning the end-of-file sentinel.
    pub fn next_token(&mut self) -> Token {
        if self.cursor < self.tokens.len() {
            let token = self.tokens[self.cursor].clone();
            self.cursor += 1;
            token
        } else {
            self.sentinel()
        }
    }

    /// Non-consuming lookahead. `depth` is relative to the next unconsumed
    /// token: `peek_token(0)` is what `next_token` would return,
    /// `peek_token(-1)` is the most recently consumed token. Out-of-range
    /// depths yield the end-of-file sentinel.
    pub fn peek_token(&self, depth: isize) -> Token {
        let index = self.cursor as isize + depth;
        if (0..self.tokens.len() as isize).contains(&index) {
            self.tokens[index as usize].clone()
        } else {
            self.sentinel()
        }
    }

    /// True once every real token has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.peek_token(0).kind == TokenKind::EndOfFile
    }

    fn sentinel(&self) -> Token {
        // The constructor always pushes an EndOfFile token last.
        self.tokens
            .last()
            .cloned()
            .unwrap_or_else(|| unreachable!("token stream always ends with a sentinel"))
    }
}

/// One-shot scanning state, consumed by [`Lexer::new`].
struct Scanner {
    file: EcoString,
    chars: Vec<char>,
    pos: usize,
    line: u32,
    /// Index of the first character of the current line; columns are
    /// offsets from here.
    line_start: usize,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
}

impl Scanner {
    fn new(file: EcoString, source: &str) -> Self {
        Self {
            file,
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            line_start: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    fn scan(&mut self) {
        while let Some(c) = self.peek_char() {
            if is_whitespace(c) {
                self.whitespace(c);
            } else if c == '#' {
                self.comment();
            } else if c == '"' {
                self.string();
            } else if c.is_ascii_digit() {
                self.number();
            } else if is_identifier_start(c) {
                self.identifier();
            } else {
                self.operator();
            }
        }
        let position = self.position_here();
        self.push(TokenKind::EndOfFile, "", position);
    }

    // ---- character classes ----------------------------------------------

    fn whitespace(&mut self, c: char) {
        if c == '\n' {
            self.newline();
        }
        self.pos += 1;
    }

    fn comment(&mut self) {
        // Consumed to end-of-line; the newline itself is left for the
        // whitespace handler so line accounting stays in one place.
        while let Some(c) = self.peek_char() {
            if c == '\n' {
                break;
            }
            self.pos += 1;
        }
    }

    fn string(&mut self) {
        let position = self.position_here();
        self.pos += 1; // opening quote
        let mut text = String::new();
        loop {
            let Some(c) = self.peek_char() else {
                self.record(LexErrorKind::UnterminatedString, position);
                return;
            };
            match c {
                '"' => {
                    self.pos += 1;
                    self.push(TokenKind::Str, text, position);
                    return;
                }
                '\\' => {
                    let escape_position = self.position_here();
                    self.pos += 1;
                    let Some(escaped) = self.peek_char() else {
                        self.record(LexErrorKind::UnterminatedString, position);
                        return;
                    };
                    self.pos += 1;
                    match unescape(escaped) {
                        Some(resolved) => text.push(resolved),
                        // Recovery is per-escape: drop the bad sequence and
                        // keep scanning the rest of the literal.
                        None => self.record(
                            LexErrorKind::UnknownEscape { sequence: escaped },
                            escape_position,
                        ),
                    }
                }
                _ => {
                    if c == '\n' {
                        self.newline();
                    }
                    text.push(c);
                    self.pos += 1;
                }
            }
        }
    }

    fn number(&mut self) {
        let position = self.position_here();
        let mut text = String::new();
        let mut seen_dot = false;
        while let Some(c) = self.peek_char() {
            if c.is_ascii_digit() {
                text.push(c);
            } else if c == '.' {
                if seen_dot {
                    // Discard the partial literal and resume after the
                    // offending dot.
                    self.pos += 1;
                    self.record(LexErrorKind::TooManyDecimalPoints, position);
                    return;
                }
                seen_dot = true;
                text.push(c);
            } else {
                break;
            }
            self.pos += 1;
        }
        let kind = if seen_dot {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        self.push(kind, text, position);
    }

    fn identifier(&mut self) {
        let position = self.position_here();
        let mut text = String::new();
        while let Some(c) = self.peek_char() {
            if !is_identifier_char(c) {
                break;
            }
            text.push(c);
            self.pos += 1;
        }
        match keyword(&text) {
            // Keyword tokens carry no text; the kind says it all.
            Some(kind) => self.push(kind, "", position),
            None => self.push(TokenKind::Identifier, text, position),
        }
    }

    /// Greedy longest-match against the operator table, backing off one
    /// character at a time. `==` therefore binds before `=`.
    fn operator(&mut self) {
        let position = self.position_here();
        let mut run = String::new();
        while let Some(c) = self.peek_char_at(self.pos + run.chars().count()) {
            if !c.is_ascii_punctuation() {
                break;
            }
            run.push(c);
        }
        let mut candidate = run.as_str();
        while !candidate.is_empty() {
            if let Some(kind) = operator_kind(candidate) {
                self.pos += candidate.chars().count();
                self.push(kind, "", position);
                return;
            }
            candidate = &candidate[..candidate.len() - 1];
        }
        // Nothing in the run matches; skip one character so scanning makes
        // progress and report the whole run.
        self.pos += 1;
        self.record(LexErrorKind::UnknownOperator { text: run.into() }, position);
    }

    // ---- helpers ---------------------------------------------------------

    fn peek_char(&self) -> Option<char> {
        self.peek_char_at(self.pos)
    }

    fn peek_char_at(&self, pos: usize) -> Option<char> {
        self.chars.get(pos).copied()
    }

    fn newline(&mut self) {
        self.line += 1;
        self.line_start = self.pos + 1;
    }

    fn position_here(&self) -> Position {
        Position::new(self.line, (self.pos - self.line_start) as u32 + 1)
    }

    fn push(&mut self, kind: TokenKind, text: impl Into<EcoString>, position: Position) {
        self.tokens
            .push(Token::new(kind, text, self.file.clone(), position));
    }

    fn record(&mut self, kind: LexErrorKind, position: Position) {
        self.errors.push(LexError {
            kind,
            file: self.file.clone(),
            position,
        });
    }
}

fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c')
}

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn unescape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '?' => Some('?'),
        'a' => Some('\x07'),
        'b' => Some('\x08'),
        'f' => Some('\x0c'),
        'v' => Some('\x0b'),
        _ => None,
    }
}

fn keyword(identifier: &str) -> Option<TokenKind> {
    let kind = match identifier {
        "func" => TokenKind::Func,
        "let" => TokenKind::Let,
        "var" => TokenKind::Var,
        "if" => TokenKind::If,
        "else" => TokenKind::Else,
        "for" => TokenKind::For,
        "while" => TokenKind::While,
        "do" => TokenKind::Do,
        "true" => TokenKind::True,
        "false" => TokenKind::False,
        "print" => TokenKind::Print,
        _ => return None,
    };
    Some(kind)
}

fn operator_kind(text: &str) -> Option<TokenKind> {
    let kind = match text {
        "(" => TokenKind::LParen,
        ")" => TokenKind::RParen,
        "{" => TokenKind::LBrace,
        "}" => TokenKind::RBrace,
        "[" => TokenKind::LBracket,
        "]" => TokenKind::RBracket,
        ":" => TokenKind::Colon,
        ";" => TokenKind::Semicolon,
        "=" => TokenKind::Equals,
        "+" => TokenKind::Plus,
        "-" => TokenKind::Minus,
        "*" => TokenKind::Star,
        "/" => TokenKind::Slash,
        "!" => TokenKind::Bang,
        "==" => TokenKind::EqualsEquals,
        "!=" => TokenKind::BangEquals,
        "<" => TokenKind::Less,
        "<=" => TokenKind::LessEquals,
        ">" => TokenKind::Greater,
        ">=" => TokenKind::GreaterEquals,
        _ => return None,
    };
    Some(kind)
}
