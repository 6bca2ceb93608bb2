//! Recursive-descent parser for Ibex.
//!
//! The parser pulls tokens from a [`Lexer`] and builds the statement list
//! for one source file. On a syntax error it records the error, enters
//! panic-mode recovery ([`Parser::synchronize`]) to the next safe
//! statement boundary and keeps parsing, so one pass reports every
//! malformed statement. Callers must check [`Parser::errors_reported`]
//! before trusting the returned tree.
//!
//! ## Grammar
//!
//! ```text
//! declaration   := function_decl | variable_decl | statement
//! function_decl := 'func' IDENTIFIER '(' ')' block
//! variable_decl := ('let'|'var') IDENTIFIER ':' IDENTIFIER ('=' expression)? ';'
//! statement     := if_stmt | for_stmt | while_stmt | do_while_stmt
//!                | print_stmt | block | expression ';'
//! if_stmt       := 'if' expression block ('else' statement)?   -- else target
//!                  must itself be a block or another 'if'
//! while_stmt    := 'while' expression block
//! do_while_stmt := 'do' block 'while' expression ';'
//! for_stmt      := 'for' (variable_decl | expression ';') expression ';'
//!                  expression block
//! print_stmt    := 'print' expression ';'
//! block         := '{' declaration* '}'
//! expression    := assignment
//! assignment    := factor ('=' factor)?
//! factor        := term (('*'|'/') factor)?
//! term          := unary (('+'|'-') factor)?
//! unary         := (('+'|'-') factor) | primary
//! primary       := INTEGER | FLOAT | STRING | 'true' | 'false' | IDENTIFIER
//! ```
//!
//! Note that every binary right-hand side re-enters `factor`, the topmost
//! binary level, instead of the next tighter one. The operators therefore
//! nest to the right: `1*2+3` parses as `1 * (2 + 3)`. This is the
//! language's established behavior and is locked in by tests; do not
//! "correct" it to conventional left-associative parsing.

mod error;
mod syntax;


pub use error::{ParseError, ParseErrorKind};
pub use syntax::{BinaryOp, Expr, Stmt, UnaryOp};

use tracing::debug;

use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};
use crate::values::Value;

/// Recursive-descent parser over a lexer's token stream.
pub struct Parser<'a> {
    lexer: &'a mut Lexer,
    errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: &'a mut Lexer) -> Self {
        Self {
            lexer,
            errors: Vec::new(),
        }
    }

    /// Number of syntax errors recorded so far.
    pub fn errors_reported(&self) -> usize {
        self.errors.len()
    }

    /// The recorded syntax errors, in source order.
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Parse top-level declarations until end of input.
    pub fn parse(&mut self) -> Vec<Stmt> {
        let mut statements = Vec::new();
        while !self.lexer.is_at_end() {
            match self.declaration() {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    debug!(%error, "recovering from syntax error");
                    self.errors.push(error);
                    self.synchronize();
                }
            }
        }
        statements
    }

    // ---- statements ------------------------------------------------------

    fn declaration(&mut self) -> Result<Stmt, ParseError> {
        if self.match_token(TokenKind::Func) {
            return self.function_declaration();
        }
        if self.match_token(TokenKind::Let) {
            return self.variable_declaration(true);
        }
        if self.match_token(TokenKind::Var) {
            return self.variable_declaration(false);
        }
        self.statement()
    }

    fn function_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self
            .consume(TokenKind::Identifier, "Expected an identifier after 'func'")?
            .text;
        self.consume(TokenKind::LParen, "Expected '(' after function name")?;
        self.consume(TokenKind::RParen, "Expected ')' after '('")?;
        let body = self.block()?;
        Ok(Stmt::FunctionDeclaration {
            name,
            body: Box::new(body),
        })
    }

    fn variable_declaration(&mut self, constant: bool) -> Result<Stmt, ParseError> {
        let name = self
            .consume(
                TokenKind::Identifier,
                "Expected an identifier after 'let' or 'var'",
            )?
            .text;
        self.consume(TokenKind::Colon, "Expected ':' after variable name")?;
        let ty = self
            .consume(TokenKind::Identifier, "Expected a type name after ':'")?
            .text;
        let initializer = if self.match_token(TokenKind::Equals) {
            Some(self.expression()?)
        } else {
            None
        };
        self.consume(
            TokenKind::Semicolon,
            "Expected ';' after variable declaration",
        )?;
        Ok(Stmt::VariableDeclaration {
            name,
            ty,
            constant,
            initializer,
        })
    }

    fn statement(&mut self) -> Result<Stmt, ParseError> {
        if self.match_token(TokenKind::If) {
            return self.if_statement();
        }
        if self.match_token(TokenKind::For) {
            return self.for_statement();
        }
        if self.match_token(TokenKind::While) {
            return self.while_statement();
        }
        if self.match_token(TokenKind::Do) {
            return self.do_while_statement();
        }
        if self.match_token(TokenKind::Print) {
            return self.print_statement();
        }
        if self.lexer.peek_token(0).kind == TokenKind::LBrace {
            return self.block();
        }
        let expression = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expected ';' after expression")?;
        Ok(Stmt::Expression(expression))
    }

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        let condition = self.expression()?;
        let then_branch = self.block()?;
        let mut else_branch = None;
        if self.match_token(TokenKind::Else) {
            let target = self.lexer.peek_token(0);
            let statement = self.statement()?;
            // Anything but a block or a chained `if` is rejected here, at
            // parse time; the interpreter does not re-check.
            if !matches!(statement, Stmt::Block(_) | Stmt::If { .. }) {
                return Err(ParseError::at(&target, ParseErrorKind::InvalidElseBranch));
            }
            else_branch = Some(Box::new(statement));
        }
        Ok(Stmt::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch,
        })
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        let condition = self.expression()?;
        let body = self.block()?;
        Ok(Stmt::While {
            condition,
            body: Box::new(body),
        })
    }

    fn do_while_statement(&mut self) -> Result<Stmt, ParseError> {
        let body = self.block()?;
        self.consume(TokenKind::While, "Expected 'while' after 'do' block")?;
        let condition = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expected ';' after 'do..while' condition")?;
        Ok(Stmt::DoWhile {
            body: Box::new(body),
            condition,
        })
    }

    fn for_statement(&mut self) -> Result<Stmt, ParseError> {
        let initializer = if self.match_token(TokenKind::Let) {
            self.variable_declaration(true)?
        } else if self.match_token(TokenKind::Var) {
            self.variable_declaration(false)?
        } else {
            let expression = self.expression()?;
            self.consume(TokenKind::Semicolon, "Expected ';' after 'for' initializer")?;
            Stmt::Expression(expression)
        };
        let condition = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expected ';' after 'for' condition")?;
        let increment = self.expression()?;
        let body = self.block()?;
        Ok(Stmt::For {
            initializer: Box::new(initializer),
            condition,
            increment,
            body: Box::new(body),
        })
    }

    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let expression = self.expression()?;
        self.consume(TokenKind::Semicolon, "Expected ';' after 'print' statement")?;
        Ok(Stmt::Print(expression))
    }

    fn block(&mut self) -> Result<Stmt, ParseError> {
        self.consume(TokenKind::LBrace, "Every block should start with '{'")?;
        let mut statements = Vec::new();
        while self.lexer.peek_token(0).kind != TokenKind::RBrace && !self.lexer.is_at_end() {
            statements.push(self.declaration()?);
        }
        self.consume(TokenKind::RBrace, "Expected '}' after block")?;
        Ok(Stmt::Block(statements))
    }

    // ---- expressions -----------------------------------------------------

    fn expression(&mut self) -> Result<Expr, ParseError> {
        self.assignment()
    }

    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let left = self.factor()?;
        if self.match_token(TokenKind::Equals) {
            let right = self.factor()?;
            return Ok(binary(BinaryOp::Assign, left, right));
        }
        Ok(left)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        let left = self.term()?;
        if self.match_token(TokenKind::Star) {
            let right = self.factor()?;
            return Ok(binary(BinaryOp::Mul, left, right));
        }
        if self.match_token(TokenKind::Slash) {
            let right = self.factor()?;
            return Ok(binary(BinaryOp::Div, left, right));
        }
        Ok(left)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        let left = self.unary()?;
        if self.match_token(TokenKind::Plus) {
            let right = self.factor()?;
            return Ok(binary(BinaryOp::Add, left, right));
        }
        if self.match_token(TokenKind::Minus) {
            let right = self.factor()?;
            return Ok(binary(BinaryOp::Sub, left, right));
        }
        Ok(left)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.match_token(TokenKind::Plus) {
            let operand = self.factor()?;
            return Ok(Expr::Unary {
                op: UnaryOp::Pos,
                operand: Box::new(operand),
            });
        }
        if self.match_token(TokenKind::Minus) {
            let operand = self.factor()?;
            return Ok(Expr::Unary {
                op: UnaryOp::Neg,
                operand: Box::new(operand),
            });
        }
        self.primary()
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.lexer.peek_token(0);
        if self.match_token(TokenKind::Integer) {
            let value = token.text.parse::<i64>().map_err(|_| {
                ParseError::at(
                    &token,
                    ParseErrorKind::InvalidNumber {
                        text: token.text.clone(),
                    },
                )
            })?;
            return Ok(Expr::Literal(Value::Integer(value)));
        }
        if self.match_token(TokenKind::Float) {
            let value = token.text.parse::<f64>().map_err(|_| {
                ParseError::at(
                    &token,
                    ParseErrorKind::InvalidNumber {
                        text: token.text.clone(),
                    },
                )
            })?;
            return Ok(Expr::Literal(Value::Float(value)));
        }
        if self.match_token(TokenKind::Str) {
            return Ok(Expr::Literal(Value::Str(token.text)));
        }
        if self.match_token(TokenKind::True) {
            return Ok(Expr::Literal(Value::Boolean(true)));
        }
        if self.match_token(TokenKind::False) {
            return Ok(Expr::Literal(Value::Boolean(false)));
        }
        if self.match_token(TokenKind::Identifier) {
            return Ok(Expr::Identifier { name: token.text });
        }
        Err(ParseError::at(
            &token,
            ParseErrorKind::InvalidPrimary { found: token.kind },
        ))
    }

    // ---- machinery -------------------------------------------------------

    /// Consume the next token if it has the given kind.
    fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.lexer.peek_token(0).kind == kind {
            self.lexer.next_token();
            return true;
        }
        false
    }

    /// Consume the next token, failing if it is not of the given kind. The
    /// offending token is consumed either way, which is what lets
    /// `synchronize` look back at it.
    fn consume(&mut self, kind: TokenKind, message: &'static str) -> Result<Token, ParseError> {
        let token = self.lexer.next_token();
        if token.kind != kind {
            return Err(ParseError::at(
                &token,
                ParseErrorKind::UnexpectedToken {
                    message,
                    found: token.kind,
                },
            ));
        }
        Ok(token)
    }

    /// Panic-mode recovery: discard tokens until a statement-terminating
    /// `;` has just been consumed or the next token starts a new
    /// declaration or statement. Bounds an error cascade to one statement.
    fn synchronize(&mut self) {
        self.lexer.next_token();
        while !self.lexer.is_at_end() {
            if self.lexer.peek_token(-1).kind == TokenKind::Semicolon {
                return;
            }
            match self.lexer.peek_token(0).kind {
                TokenKind::Func
                | TokenKind::Let
                | TokenKind::Var
                | TokenKind::If
                | TokenKind::For
                | TokenKind::While
                | TokenKind::Do => return,
                _ => {
                    self.lexer.next_token();
                }
            }
        }
    }
}

fn binary(op: BinaryOp, left: Expr, right: Expr) -> Expr {
    Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    }
}
