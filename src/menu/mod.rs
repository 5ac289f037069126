use crate::operations::registry::OperationRegistry;

pub const HEADER: &str = "======== CALCULATOR ==========";

/// One `"{index}.{name}"` entry per operation, 1-based, in registration
/// order.
pub fn lines(registry: &OperationRegistry) -> Vec<String> {
    registry
        .list()
        .iter()
        .enumerate()
        .map(|(i, operation)| format!("{}.{}", i + 1, operation.name()))
        .collect()
}

pub fn show(registry: &OperationRegistry) {
    println!("{}", HEADER);
    for line in lines(registry) {
        println!("{}", line);
    }
}
