//! Interpreter state machine
//!
//! Tokens are collected region by region. Reserved words close the current
//! region, which is converted to postfix and reduced to a tree on the spot.

use super::error::EvalError;
use super::expr::Expr;
use super::shunting_yard::to_postfix;
use crate::frontend::lexer::tokens::{Reserved, Token};

/// Region currently being collected, with the trees already built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stage {
    Condition,
    PositiveStatement { condition: Expr },
    NegativeStatement { condition: Expr, positive: Expr },
}

/// Interpreter state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterpreterState {
    /// `has_else` tells which statement shape to expect
    Initial { has_else: bool },
    IfThen { stage: Stage, region: Vec<Token> },
    IfThenElse { stage: Stage, region: Vec<Token> },
    Done(Expr),
}

fn build(
    region: &[Token],
    name: &'static str,
) -> Result<Expr, EvalError> {
    let postfix = to_postfix(region)?;
    Expr::from_postfix(&postfix, name)
}

fn unexpected(
    token: &Token,
    context: &str,
) -> EvalError {
    EvalError::IllegalState(format!("unexpected '{}' {}", token.lexeme(), context))
}

impl InterpreterState {
    pub fn new(has_else: bool) -> Self {
        InterpreterState::Initial { has_else }
    }

    /// Feed one token
    pub fn consume(
        self,
        token: &Token,
    ) -> Result<Self, EvalError> {
        if token.is_reserved(Reserved::ElseIf) {
            return Err(EvalError::ElseIfUnsupported);
        }

        match self {
            InterpreterState::Initial { has_else } => match token.as_reserved() {
                Some(Reserved::If) if has_else => Ok(InterpreterState::IfThenElse {
                    stage: Stage::Condition,
                    region: Vec::new(),
                }),
                Some(Reserved::If) => Ok(InterpreterState::IfThen {
                    stage: Stage::Condition,
                    region: Vec::new(),
                }),
                _ => Err(unexpected(token, "before IF")),
            },
            InterpreterState::IfThen { stage, mut region } => match token.as_reserved() {
                None => {
                    region.push(token.clone());
                    Ok(InterpreterState::IfThen { stage, region })
                }
                Some(Reserved::Then) => match stage {
                    Stage::Condition => Ok(InterpreterState::IfThen {
                        stage: Stage::PositiveStatement {
                            condition: build(&region, "condition")?,
                        },
                        region: Vec::new(),
                    }),
                    _ => Err(unexpected(token, "after the condition")),
                },
                Some(Reserved::EndIf) => match stage {
                    Stage::PositiveStatement { condition } => {
                        Ok(InterpreterState::Done(Expr::IfThen {
                            condition: Box::new(condition),
                            positive: Box::new(build(&region, "positive statement")?),
                        }))
                    }
                    _ => Err(unexpected(token, "before THEN")),
                },
                Some(_) => Err(unexpected(token, "in an IF-THEN statement")),
            },
            InterpreterState::IfThenElse { stage, mut region } => match token.as_reserved() {
                None => {
                    region.push(token.clone());
                    Ok(InterpreterState::IfThenElse { stage, region })
                }
                Some(Reserved::Then) => match stage {
                    Stage::Condition => Ok(InterpreterState::IfThenElse {
                        stage: Stage::PositiveStatement {
                            condition: build(&region, "condition")?,
                        },
                        region: Vec::new(),
                    }),
                    _ => Err(unexpected(token, "after the condition")),
                },
                Some(Reserved::Else) => match stage {
                    Stage::PositiveStatement { condition } => Ok(InterpreterState::IfThenElse {
                        stage: Stage::NegativeStatement {
                            condition,
                            positive: build(&region, "positive statement")?,
                        },
                        region: Vec::new(),
                    }),
                    _ => Err(unexpected(token, "outside the positive statement")),
                },
                Some(Reserved::EndIf) => match stage {
                    Stage::NegativeStatement {
                        condition,
                        positive,
                    } => Ok(InterpreterState::Done(Expr::IfThenElse {
                        condition: Box::new(condition),
                        positive: Box::new(positive),
                        negative: Box::new(build(&region, "negative statement")?),
                    })),
                    _ => Err(unexpected(token, "before ELSE")),
                },
                Some(_) => Err(unexpected(token, "in an IF-THEN-ELSE statement")),
            },
            InterpreterState::Done(_) => Err(unexpected(token, "after END IF")),
        }
    }
}
