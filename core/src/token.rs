//! Lexical tokens and source positions.

use core::fmt;

use ecow::EcoString;

/// A 1-based line/column pair inside a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// The classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Integer,
    Float,
    Str,
    Identifier,
    // Keywords.
    Func,
    Let,
    Var,
    If,
    Else,
    For,
    While,
    Do,
    True,
    False,
    Print,
    // Operators.
    LParen,
    RParen,
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Colon,
    Semicolon,
    Equals,
    Plus,
    Minus,
    Star,
    Slash,
    Bang,
    EqualsEquals,
    BangEquals,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
    /// Sentinel, always the last token of a stream.
    EndOfFile,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Integer => "integer literal",
            TokenKind::Float => "float literal",
            TokenKind::Str => "string literal",
            TokenKind::Identifier => "identifier",
            TokenKind::Func => "'func'",
            TokenKind::Let => "'let'",
            TokenKind::Var => "'var'",
            TokenKind::If => "'if'",
            TokenKind::Else => "'else'",
            TokenKind::For => "'for'",
            TokenKind::While => "'while'",
            TokenKind::Do => "'do'",
            TokenKind::True => "'true'",
            TokenKind::False => "'false'",
            TokenKind::Print => "'print'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LBracket => "'['",
            TokenKind::RBracket => "']'",
            TokenKind::Colon => "':'",
            TokenKind::Semicolon => "';'",
            TokenKind::Equals => "'='",
            TokenKind::Plus => "'+'",
            TokenKind::Minus => "'-'",
            TokenKind::Star => "'*'",
            TokenKind::Slash => "'/'",
            TokenKind::Bang => "'!'",
            TokenKind::EqualsEquals => "'=='",
            TokenKind::BangEquals => "'!='",
            TokenKind::Less => "'<'",
            TokenKind::LessEquals => "'<='",
            TokenKind::Greater => "'>'",
            TokenKind::GreaterEquals => "'>='",
            TokenKind::EndOfFile => "end of file",
        };
        f.write_str(name)
    }
}

/// One lexical unit with its source position.
///
/// Tokens are immutable once produced. Keyword and operator tokens carry
/// empty `text`; literal and identifier tokens carry the (unescaped)
/// lexeme. `EcoString` keeps the frequent clones done by parser lookahead
/// cheap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: EcoString,
    pub file: EcoString,
    pub position: Position,
}

impl Token {
    pub fn new(
        kind: TokenKind,
        text: impl Into<EcoString>,
        file: EcoString,
        position: Position,
    ) -> Self {
        Self {
            kind,
            text: text.into(),
            file,
            position,
        }
    }
}
