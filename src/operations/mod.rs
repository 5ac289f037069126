pub mod arithmetic;
pub mod registry;
pub mod scientific;

use std::fmt::Debug;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum OperationErr {
    #[error("Division by zero or missing second operand.")]
    DivisionByZero,
    #[error("Expected {expected} operand(s), received {received}.")]
    MissingOperands { expected: usize, received: usize },
}

/// How many operands an operation consumes. Fixed at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    pub fn operand_count(&self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// A named pure function over a sequence of numbers. Binary operations fold
/// left-to-right when given more than two operands.
pub trait Operation {
    fn name(&self) -> String;
    fn arity(&self) -> Arity;
    fn run(&self, numbers: &[f64]) -> Result<f64, OperationErr>;
}

impl Debug for dyn Operation + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}
