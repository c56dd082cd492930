//! Expression tree
//!
//! Trees are built bottom-up from postfix tokens with an explicit stack and
//! evaluated recursively. Only the taken branch of a conditional is evaluated.

use serde::Serialize;
use std::fmt;

use super::error::EvalError;
use crate::frontend::lexer::tokens::{Operator, Token, TokenKind};

/// Terminal value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Number(i64),
    Boolean(bool),
    /// Result of an `IF ... THEN` whose condition is false
    Null,
}

impl Value {
    /// Interpret an operand lexeme
    pub fn from_lexeme(lexeme: &str) -> Result<Self, EvalError> {
        if !lexeme.is_empty() && lexeme.chars().all(|c| c.is_ascii_digit()) {
            return lexeme
                .parse()
                .map(Value::Number)
                .map_err(|_| EvalError::IntegerOutOfRange(lexeme.to_string()));
        }
        if lexeme.eq_ignore_ascii_case("true") {
            Ok(Value::Boolean(true))
        } else if lexeme.eq_ignore_ascii_case("false") {
            Ok(Value::Boolean(false))
        } else {
            Err(EvalError::LiteralIdentifier(lexeme.to_string()))
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Boolean(_) => "boolean",
            Value::Null => "null",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Null => write!(f, "null"),
        }
    }
}

/// Composite node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Sum,
    Difference,
    Product,
    Division,
    GreaterThan,
    LesserThan,
    Equal,
    And,
    Or,
}

impl From<Operator> for BinaryOp {
    fn from(operator: Operator) -> Self {
        match operator {
            Operator::Plus => BinaryOp::Sum,
            Operator::Minus => BinaryOp::Difference,
            Operator::Multiply => BinaryOp::Product,
            Operator::Divide => BinaryOp::Division,
            Operator::Greater => BinaryOp::GreaterThan,
            Operator::Lesser => BinaryOp::LesserThan,
            Operator::Equals => BinaryOp::Equal,
            Operator::And => BinaryOp::And,
            Operator::Or => BinaryOp::Or,
        }
    }
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Sum => "+",
            BinaryOp::Difference => "-",
            BinaryOp::Product => "*",
            BinaryOp::Division => "/",
            BinaryOp::GreaterThan => ">",
            BinaryOp::LesserThan => "<",
            BinaryOp::Equal => "==",
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
        }
    }

    fn number(
        self,
        value: Value,
    ) -> Result<i64, EvalError> {
        match value {
            Value::Number(n) => Ok(n),
            other => Err(self.mismatch("number", other)),
        }
    }

    fn boolean(
        self,
        value: Value,
    ) -> Result<bool, EvalError> {
        match value {
            Value::Boolean(b) => Ok(b),
            other => Err(self.mismatch("boolean", other)),
        }
    }

    fn mismatch(
        self,
        expected: &'static str,
        found: Value,
    ) -> EvalError {
        EvalError::TypeMismatch {
            operator: self.symbol(),
            expected,
            found: found.type_name(),
        }
    }

    fn apply(
        self,
        lhs: &Expr,
        rhs: &Expr,
    ) -> Result<Value, EvalError> {
        let left = lhs.evaluate()?;
        let right = rhs.evaluate()?;

        // both sides are evaluated; the left one alone may decide a logical operator
        match (self, left) {
            (BinaryOp::And, Value::Boolean(false)) => return Ok(Value::Boolean(false)),
            (BinaryOp::Or, Value::Boolean(true)) => return Ok(Value::Boolean(true)),
            _ => {}
        }

        let overflow = || EvalError::Overflow(self.symbol());

        let value = match self {
            BinaryOp::Sum => {
                Value::Number(self.number(left)?.checked_add(self.number(right)?).ok_or_else(overflow)?)
            }
            BinaryOp::Difference => {
                Value::Number(self.number(left)?.checked_sub(self.number(right)?).ok_or_else(overflow)?)
            }
            BinaryOp::Product => {
                Value::Number(self.number(left)?.checked_mul(self.number(right)?).ok_or_else(overflow)?)
            }
            BinaryOp::Division => {
                let dividend = self.number(left)?;
                let divisor = self.number(right)?;
                if divisor == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                Value::Number(dividend.checked_div(divisor).ok_or_else(overflow)?)
            }
            BinaryOp::GreaterThan => Value::Boolean(self.number(left)? > self.number(right)?),
            BinaryOp::LesserThan => Value::Boolean(self.number(left)? < self.number(right)?),
            BinaryOp::Equal => Value::Boolean(self.number(left)? == self.number(right)?),
            BinaryOp::And => Value::Boolean(self.boolean(left)? && self.boolean(right)?),
            BinaryOp::Or => Value::Boolean(self.boolean(left)? || self.boolean(right)?),
        };
        Ok(value)
    }
}

/// Expression tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Terminal(Value),
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    IfThen {
        condition: Box<Expr>,
        positive: Box<Expr>,
    },
    IfThenElse {
        condition: Box<Expr>,
        positive: Box<Expr>,
        negative: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(
        op: BinaryOp,
        lhs: Expr,
        rhs: Expr,
    ) -> Self {
        Expr::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    /// Reduce one postfix region to a single tree.
    ///
    /// Each operator pops the right operand first, then the left one.
    pub fn from_postfix(
        postfix: &[Token],
        region: &'static str,
    ) -> Result<Self, EvalError> {
        let mut stack: Vec<Expr> = Vec::new();

        for token in postfix {
            match &token.kind {
                TokenKind::Operand(lexeme) => {
                    stack.push(Expr::Terminal(Value::from_lexeme(lexeme)?));
                }
                TokenKind::Operator(operator) => {
                    let first = stack.pop();
                    let second = stack.pop();
                    match (second, first) {
                        (Some(lhs), Some(rhs)) => {
                            stack.push(Expr::binary((*operator).into(), lhs, rhs));
                        }
                        (second, first) => {
                            return Err(EvalError::MissingOperand {
                                operator: operator.lexeme(),
                                found: usize::from(second.is_some()) + usize::from(first.is_some()),
                            });
                        }
                    }
                }
                TokenKind::Reserved(reserved) => {
                    return Err(EvalError::IllegalArgument(format!(
                        "'{}' cannot appear inside an expression",
                        reserved.lexeme()
                    )));
                }
            }
        }

        match stack.len() {
            1 => stack.pop().ok_or(EvalError::MalformedExpression { region, found: 0 }),
            found => Err(EvalError::MalformedExpression { region, found }),
        }
    }

    /// Evaluate the tree
    pub fn evaluate(&self) -> Result<Value, EvalError> {
        match self {
            Expr::Terminal(value) => Ok(*value),
            Expr::Binary { op, lhs, rhs } => op.apply(lhs, rhs),
            Expr::IfThen {
                condition,
                positive,
            } => {
                if evaluate_condition(condition)? {
                    positive.evaluate()
                } else {
                    Ok(Value::Null)
                }
            }
            Expr::IfThenElse {
                condition,
                positive,
                negative,
            } => {
                if evaluate_condition(condition)? {
                    positive.evaluate()
                } else {
                    negative.evaluate()
                }
            }
        }
    }
}

fn evaluate_condition(condition: &Expr) -> Result<bool, EvalError> {
    match condition.evaluate()? {
        Value::Boolean(b) => Ok(b),
        other => Err(EvalError::TypeMismatch {
            operator: "IF",
            expected: "boolean",
            found: other.type_name(),
        }),
    }
}
