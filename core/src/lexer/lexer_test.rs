use pretty_assertions::assert_eq;

use crate::lexer::{LexErrorKind, Lexer};
use crate::token::{Position, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    let mut lexer = Lexer::new("test.ibx", source);
    let mut kinds = Vec::new();
    loop {
        let token = lexer.next_token();
        kinds.push(token.kind);
        if token.kind == TokenKind::EndOfFile {
            return kinds;
        }
    }
}

#[test]
fn identifier() {
    let mut lexer = Lexer::new("test.ibx", "identifier");
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Identifier);
    assert_eq!(token.text, "identifier");
    assert_eq!(lexer.next_token().kind, TokenKind::EndOfFile);
}

#[test]
fn keywords_carry_no_text() {
    let mut lexer = Lexer::new("test.ibx", "func let var if else for while do true false print");
    for expected in [
        TokenKind::Func,
        TokenKind::Let,
        TokenKind::Var,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::For,
        TokenKind::While,
        TokenKind::Do,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Print,
    ] {
        let token = lexer.next_token();
        assert_eq!(token.kind, expected);
        assert_eq!(token.text, "");
    }
    assert!(lexer.is_at_end());
}

#[test]
fn numbers() {
    let mut lexer = Lexer::new("test.ibx", "6453 23.6");
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Integer);
    assert_eq!(token.text, "6453");
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Float);
    assert_eq!(token.text, "23.6");
    assert_eq!(lexer.errors_reported(), 0);
}

#[test]
fn integer_yields_exactly_one_token() {
    assert_eq!(
        kinds("1234567"),
        vec![TokenKind::Integer, TokenKind::EndOfFile]
    );
}

#[test]
fn second_decimal_point_is_an_error_not_a_hang() {
    let mut lexer = Lexer::new("test.ibx", "1.2.3");
    assert_eq!(lexer.errors_reported(), 1);
    assert_eq!(
        lexer.errors()[0].kind,
        LexErrorKind::TooManyDecimalPoints
    );
    // The partial literal is discarded; scanning resumes after the dot.
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Integer);
    assert_eq!(token.text, "3");
    assert_eq!(lexer.next_token().kind, TokenKind::EndOfFile);
}

#[test]
fn string_escapes() {
    let mut lexer = Lexer::new("test.ibx", r#""a\tb\nc\\\"""#);
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Str);
    assert_eq!(token.text, "a\tb\nc\\\"");
    assert_eq!(lexer.errors_reported(), 0);
}

#[test]
fn unknown_escape_recovers_inside_the_string() {
    let mut lexer = Lexer::new("test.ibx", r#""a\qb""#);
    assert_eq!(lexer.errors_reported(), 1);
    assert_eq!(
        lexer.errors()[0].kind,
        LexErrorKind::UnknownEscape { sequence: 'q' }
    );
    // The bad escape is dropped, the rest of the literal survives.
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Str);
    assert_eq!(token.text, "ab");
}

#[test]
fn unterminated_string() {
    let mut lexer = Lexer::new("test.ibx", "\"abc");
    assert_eq!(lexer.errors_reported(), 1);
    assert_eq!(lexer.errors()[0].kind, LexErrorKind::UnterminatedString);
    assert_eq!(lexer.next_token().kind, TokenKind::EndOfFile);
}

#[test]
fn operators_longest_match_first() {
    assert_eq!(
        kinds("== = <= < != !"),
        vec![
            TokenKind::EqualsEquals,
            TokenKind::Equals,
            TokenKind::LessEquals,
            TokenKind::Less,
            TokenKind::BangEquals,
            TokenKind::Bang,
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn operator_run_backs_off_one_character_at_a_time() {
    // `===` is not an operator; the greedy run backs off to `==` and the
    // remaining `=` is scanned on its own.
    assert_eq!(
        kinds("==="),
        vec![
            TokenKind::EqualsEquals,
            TokenKind::Equals,
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn brackets() {
    assert_eq!(
        kinds("(){}[]"),
        vec![
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::EndOfFile,
        ]
    );
}

#[test]
fn unknown_operator_is_recorded_and_scanning_continues() {
    let mut lexer = Lexer::new("test.ibx", "$ 1");
    assert_eq!(lexer.errors_reported(), 1);
    assert!(matches!(
        lexer.errors()[0].kind,
        LexErrorKind::UnknownOperator { .. }
    ));
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Integer);
    assert_eq!(token.text, "1");
}

#[test]
fn comments_run_to_end_of_line() {
    let mut lexer = Lexer::new("test.ibx", "# a comment\n42");
    let token = lexer.next_token();
    assert_eq!(token.kind, TokenKind::Integer);
    assert_eq!(token.text, "42");
    assert_eq!(token.position, Position::new(2, 1));
}

#[test]
fn positions_are_one_based_token_start() {
    let mut lexer = Lexer::new("test.ibx", "a\n bc");
    let token = lexer.next_token();
    assert_eq!(token.position, Position::new(1, 1));
    let token = lexer.next_token();
    assert_eq!(token.text, "bc");
    assert_eq!(token.position, Position::new(2, 2));
}

#[test]
fn tokens_carry_the_filename() {
    let mut lexer = Lexer::new("script.ibx", "x");
    assert_eq!(lexer.next_token().file, "script.ibx");
}

#[test]
fn peek_does_not_consume_and_negative_depth_looks_back() {
    let mut lexer = Lexer::new("test.ibx", "1 2 3");
    assert_eq!(lexer.peek_token(0).text, "1");
    assert_eq!(lexer.peek_token(1).text, "2");
    assert_eq!(lexer.peek_token(0).text, "1");

    let consumed = lexer.next_token();
    assert_eq!(consumed.text, "1");
    assert_eq!(lexer.peek_token(-1), consumed);
    assert_eq!(lexer.peek_token(0).text, "2");
}

#[test]
fn end_of_file_is_sticky() {
    let mut lexer = Lexer::new("test.ibx", "");
    assert!(lexer.is_at_end());
    assert_eq!(lexer.next_token().kind, TokenKind::EndOfFile);
    assert_eq!(lexer.next_token().kind, TokenKind::EndOfFile);
}
