//! Token types

use serde::Serialize;
use std::fmt;

use crate::util::span::Position;

/// Reserved keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Reserved {
    If,
    Then,
    Else,
    ElseIf,
    EndIf,
}

impl Reserved {
    /// Source text of the keyword
    pub fn lexeme(self) -> &'static str {
        match self {
            Reserved::If => "IF",
            Reserved::Then => "THEN",
            Reserved::Else => "ELSE",
            Reserved::ElseIf => "ELSEIF",
            Reserved::EndIf => "END IF",
        }
    }
}

/// Binary operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Greater,
    Lesser,
    Equals,
    And,
    Or,
}

impl Operator {
    /// Every operator takes exactly two operands
    pub const ARITY: usize = 2;

    /// Source text of the operator
    pub fn lexeme(self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Greater => ">",
            Operator::Lesser => "<",
            Operator::Equals => "==",
            Operator::And => "AND",
            Operator::Or => "OR",
        }
    }

    /// Single-character operators recognized without lookahead
    pub fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Plus),
            '-' => Some(Operator::Minus),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '>' => Some(Operator::Greater),
            '<' => Some(Operator::Lesser),
            _ => None,
        }
    }

    /// `+ - * /`
    pub fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Operator::Plus | Operator::Minus | Operator::Multiply | Operator::Divide
        )
    }

    /// `== > <`
    pub fn is_comparison(self) -> bool {
        matches!(self, Operator::Equals | Operator::Greater | Operator::Lesser)
    }

    /// `AND OR`
    pub fn is_logical(self) -> bool {
        matches!(self, Operator::And | Operator::Or)
    }
}

/// Token kind
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum TokenKind {
    Reserved(Reserved),
    /// Integer or boolean literal, or an unsupported literal identifier
    Operand(String),
    Operator(Operator),
}

/// Token
///
/// Equality compares kinds only; the position is metadata.
#[derive(Debug, Clone, Eq, Serialize)]
pub struct Token {
    #[serde(flatten)]
    pub kind: TokenKind,
    pub position: Option<Position>,
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            position: None,
        }
    }

    pub fn reserved(reserved: Reserved) -> Self {
        Self::new(TokenKind::Reserved(reserved))
    }

    pub fn operand(lexeme: impl Into<String>) -> Self {
        Self::new(TokenKind::Operand(lexeme.into()))
    }

    pub fn operator(operator: Operator) -> Self {
        Self::new(TokenKind::Operator(operator))
    }

    /// Attach a source position
    #[inline]
    pub fn at(
        mut self,
        position: Position,
    ) -> Self {
        self.position = Some(position);
        self
    }

    #[inline]
    pub fn at_opt(
        mut self,
        position: Option<Position>,
    ) -> Self {
        self.position = position;
        self
    }

    /// Source text of the token
    pub fn lexeme(&self) -> &str {
        match &self.kind {
            TokenKind::Reserved(reserved) => reserved.lexeme(),
            TokenKind::Operand(lexeme) => lexeme,
            TokenKind::Operator(operator) => operator.lexeme(),
        }
    }

    pub fn is_reserved(
        &self,
        reserved: Reserved,
    ) -> bool {
        self.kind == TokenKind::Reserved(reserved)
    }

    pub fn as_reserved(&self) -> Option<Reserved> {
        match self.kind {
            TokenKind::Reserved(reserved) => Some(reserved),
            _ => None,
        }
    }

    pub fn as_operator(&self) -> Option<Operator> {
        match self.kind {
            TokenKind::Operator(operator) => Some(operator),
            _ => None,
        }
    }

    pub fn is_operand(&self) -> bool {
        matches!(self.kind, TokenKind::Operand(_))
    }
}

impl PartialEq for Token {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.kind == other.kind
    }
}

impl From<TokenKind> for Token {
    fn from(kind: TokenKind) -> Self {
        Token::new(kind)
    }
}

impl fmt::Display for Token {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}
