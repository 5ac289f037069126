use crate::operations::{Arity, Operation, OperationErr};

pub struct Addition();

impl Operation for Addition {
    fn name(&self) -> String {
        String::from("Addition")
    }
    fn arity(&self) -> Arity {
        Arity::Binary
    }
    fn run(&self, numbers: &[f64]) -> Result<f64, OperationErr> {
        Ok(numbers.iter().sum())
    }
}

pub struct Subtraction();

impl Operation for Subtraction {
    fn name(&self) -> String {
        String::from("Subtraction")
    }
    fn arity(&self) -> Arity {
        Arity::Binary
    }
    fn run(&self, numbers: &[f64]) -> Result<f64, OperationErr> {
        numbers
            .iter()
            .copied()
            .reduce(|a, b| a - b)
            .ok_or(OperationErr::MissingOperands {
                expected: 2,
                received: numbers.len(),
            })
    }
}

pub struct Multiplication();

impl Operation for Multiplication {
    fn name(&self) -> String {
        String::from("Multiplication")
    }
    fn arity(&self) -> Arity {
        Arity::Binary
    }
    fn run(&self, numbers: &[f64]) -> Result<f64, OperationErr> {
        numbers
            .iter()
            .copied()
            .reduce(|a, b| a * b)
            .ok_or(OperationErr::MissingOperands {
                expected: 2,
                received: numbers.len(),
            })
    }
}

pub struct Division();

impl Operation for Division {
    fn name(&self) -> String {
        String::from("Division")
    }
    fn arity(&self) -> Arity {
        Arity::Binary
    }
    // Only the second operand is guarded; later zeros fold to infinity.
    fn run(&self, numbers: &[f64]) -> Result<f64, OperationErr> {
        match numbers {
            [first, second, rest @ ..] if *second != 0.0 => {
                Ok(rest.iter().fold(first / second, |acc, x| acc / x))
            }
            _ => Err(OperationErr::DivisionByZero),
        }
    }
}

pub struct Power();

impl Operation for Power {
    fn name(&self) -> String {
        String::from("Power")
    }
    fn arity(&self) -> Arity {
        Arity::Binary
    }
    fn run(&self, numbers: &[f64]) -> Result<f64, OperationErr> {
        match numbers {
            [base, exponent, ..] => Ok(base.powf(*exponent)),
            _ => Err(OperationErr::MissingOperands {
                expected: 2,
                received: numbers.len(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition_folds_any_length() {
        assert_eq!(Addition().run(&[3.0, 4.0]).unwrap(), 7.0);
        assert_eq!(Addition().run(&[1.0, 2.0, 3.0]).unwrap(), 6.0);
        assert_eq!(Addition().run(&[]).unwrap(), 0.0);
    }

    #[test]
    fn test_addition_commutative() {
        assert_eq!(
            Addition().run(&[1.5, 2.25]).unwrap(),
            Addition().run(&[2.25, 1.5]).unwrap()
        );
        assert_eq!(
            Addition().run(&[1.0, 2.0, 3.0]).unwrap(),
            Addition().run(&[3.0, 1.0, 2.0]).unwrap()
        );
    }

    #[test]
    fn test_subtraction_left_fold() {
        assert_eq!(Subtraction().run(&[10.0, 3.0, 2.0]).unwrap(), 5.0);
        assert_eq!(Subtraction().run(&[10.0]).unwrap(), 10.0);
    }

    #[test]
    fn test_subtraction_empty_errors() {
        match Subtraction().run(&[]) {
            Err(OperationErr::MissingOperands { .. }) => {}
            other => panic!("Expected MissingOperands, got {:?}", other),
        }
    }

    #[test]
    fn test_multiplication_left_fold() {
        assert_eq!(Multiplication().run(&[2.0, 3.0, 4.0]).unwrap(), 24.0);
    }

    #[test]
    fn test_division_left_fold() {
        assert_eq!(Division().run(&[10.0, 2.0]).unwrap(), 5.0);
        assert_eq!(Division().run(&[100.0, 5.0, 2.0]).unwrap(), 10.0);
    }

    #[test]
    fn test_division_by_zero_is_classified() {
        match Division().run(&[10.0, 0.0]) {
            Err(OperationErr::DivisionByZero) => {}
            other => panic!("Expected DivisionByZero, got {:?}", other),
        }
    }

    #[test]
    fn test_division_missing_second_operand() {
        match Division().run(&[10.0]) {
            Err(OperationErr::DivisionByZero) => {}
            other => panic!("Expected DivisionByZero, got {:?}", other),
        }
    }

    #[test]
    fn test_division_guards_only_second_operand() {
        assert!(Division().run(&[10.0, 2.0, 0.0]).unwrap().is_infinite());
    }

    #[test]
    fn test_power() {
        assert_eq!(Power().run(&[2.0, 10.0]).unwrap(), 1024.0);
        assert_eq!(Power().run(&[9.0, 0.5]).unwrap(), 3.0);
    }

    #[test]
    fn test_power_missing_operand_errors() {
        match Power().run(&[2.0]) {
            Err(OperationErr::MissingOperands { expected: 2, .. }) => {}
            other => panic!("Expected MissingOperands, got {:?}", other),
        }
    }
}
