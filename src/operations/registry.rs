use crate::operations::{
    Operation,
    arithmetic::{Addition, Division, Multiplication, Power, Subtraction},
    scientific::{Cosine, Cotangent, DecimalLogarithm, NaturalLogarithm, Sine, SquareRoot, Tangent},
};

/// Ordered collection of operations. Registration order is menu order and
/// never changes after construction.
pub struct OperationRegistry {
    operations: Vec<Box<dyn Operation>>,
}

impl OperationRegistry {
    pub fn new(operations: Vec<Box<dyn Operation>>) -> Self {
        Self { operations }
    }

    pub fn list(&self) -> &[Box<dyn Operation>] {
        &self.operations
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// 1-based menu lookup. Zero, negative and out-of-range ids all resolve
    /// to `None`, the exit signal.
    pub fn resolve(&self, id: i64) -> Option<&dyn Operation> {
        if id <= 0 {
            return None;
        }
        self.operations.get(id as usize - 1).map(|x| x.as_ref())
    }
}

pub fn setup() -> OperationRegistry {
    OperationRegistry::new(vec![
        Box::new(Addition()),
        Box::new(Subtraction()),
        Box::new(Multiplication()),
        Box::new(Division()),
        Box::new(Power()),
        Box::new(SquareRoot()),
        Box::new(Sine()),
        Box::new(Cosine()),
        Box::new(Tangent()),
        Box::new(Cotangent()),
        Box::new(NaturalLogarithm()),
        Box::new(DecimalLogarithm()),
    ])
}
