use crate::operations::{Arity, Operation, OperationErr};

fn first_operand(numbers: &[f64]) -> Result<f64, OperationErr> {
    numbers
        .first()
        .copied()
        .ok_or(OperationErr::MissingOperands {
            expected: 1,
            received: 0,
        })
}

pub struct SquareRoot();

impl Operation for SquareRoot {
    fn name(&self) -> String {
        String::from("Square root")
    }
    fn arity(&self) -> Arity {
        Arity::Unary
    }
    fn run(&self, numbers: &[f64]) -> Result<f64, OperationErr> {
        Ok(first_operand(numbers)?.sqrt())
    }
}

pub struct Sine();

impl Operation for Sine {
    fn name(&self) -> String {
        String::from("Sine")
    }
    fn arity(&self) -> Arity {
        Arity::Unary
    }
    fn run(&self, numbers: &[f64]) -> Result<f64, OperationErr> {
        Ok(first_operand(numbers)?.sin())
    }
}

pub struct Cosine();

impl Operation for Cosine {
    fn name(&self) -> String {
        String::from("Cosine")
    }
    fn arity(&self) -> Arity {
        Arity::Unary
    }
    fn run(&self, numbers: &[f64]) -> Result<f64, OperationErr> {
        Ok(first_operand(numbers)?.cos())
    }
}

pub struct Tangent();

impl Operation for Tangent {
    fn name(&self) -> String {
        String::from("Tangent")
    }
    fn arity(&self) -> Arity {
        Arity::Unary
    }
    fn run(&self, numbers: &[f64]) -> Result<f64, OperationErr> {
        Ok(first_operand(numbers)?.tan())
    }
}

pub struct Cotangent();

impl Operation for Cotangent {
    fn name(&self) -> String {
        String::from("Cotangent")
    }
    fn arity(&self) -> Arity {
        Arity::Unary
    }
    // Unguarded at x = 0; the reciprocal propagates infinity.
    fn run(&self, numbers: &[f64]) -> Result<f64, OperationErr> {
        Ok(1.0 / first_operand(numbers)?.tan())
    }
}

pub struct NaturalLogarithm();

impl Operation for NaturalLogarithm {
    fn name(&self) -> String {
        String::from("Natural logarithm (ln)")
    }
    fn arity(&self) -> Arity {
        Arity::Unary
    }
    fn run(&self, numbers: &[f64]) -> Result<f64, OperationErr> {
        Ok(first_operand(numbers)?.ln())
    }
}

pub struct DecimalLogarithm();

impl Operation for DecimalLogarithm {
    fn name(&self) -> String {
        String::from("Decimal logarithm (log10)")
    }
    fn arity(&self) -> Arity {
        Arity::Unary
    }
    fn run(&self, numbers: &[f64]) -> Result<f64, OperationErr> {
        Ok(first_operand(numbers)?.log10())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_root() {
        assert_eq!(SquareRoot().run(&[16.0]).unwrap(), 4.0);
    }

    #[test]
    fn test_square_root_of_negative_is_nan() {
        assert!(SquareRoot().run(&[-1.0]).unwrap().is_nan());
    }

    #[test]
    fn test_trigonometry_at_zero() {
        assert_eq!(Sine().run(&[0.0]).unwrap(), 0.0);
        assert_eq!(Cosine().run(&[0.0]).unwrap(), 1.0);
        assert_eq!(Tangent().run(&[0.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_cotangent_is_reciprocal_tangent() {
        let x = std::f64::consts::FRAC_PI_4;
        assert!((Cotangent().run(&[x]).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cotangent_at_zero_is_infinite() {
        assert!(Cotangent().run(&[0.0]).unwrap().is_infinite());
    }

    #[test]
    fn test_logarithms() {
        assert!((NaturalLogarithm().run(&[std::f64::consts::E]).unwrap() - 1.0).abs() < 1e-12);
        assert!((DecimalLogarithm().run(&[1000.0]).unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_unary_accepts_exactly_one_operand() {
        assert_eq!(SquareRoot().run(&[16.0, 99.0]).unwrap(), 4.0);
        match SquareRoot().run(&[]) {
            Err(OperationErr::MissingOperands { expected: 1, .. }) => {}
            other => panic!("Expected MissingOperands, got {:?}", other),
        }
    }
}
