use log::debug;
use rustyline::error::ReadlineError;

use crate::{
    console::{self, Console, ConsoleErr, Prompt},
    menu,
    operations::registry::{self, OperationRegistry},
};

/// Runs the show -> select -> collect -> run -> report cycle until the user
/// exits. Every operational error is reported and recovered within one
/// iteration.
pub struct Application<P: Prompt> {
    registry: OperationRegistry,
    console: P,
}

impl Application<Console> {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self::with_console(registry::setup(), Console::new()?))
    }
}

impl<P: Prompt> Application<P> {
    pub fn with_console(registry: OperationRegistry, console: P) -> Self {
        Self { registry, console }
    }

    pub fn run(&mut self) -> Result<(), ConsoleErr> {
        loop {
            menu::show(&self.registry);

            let id = match console::read_index(&mut self.console) {
                Ok(id) => id,
                Err(ConsoleErr::InvalidNumber) => {
                    println!("Error: Invalid number format.");
                    continue;
                }
                Err(ConsoleErr::Readline(ReadlineError::Interrupted))
                | Err(ConsoleErr::Readline(ReadlineError::Eof)) => break,
                Err(err) => return Err(err),
            };

            let Some(operation) = self.registry.resolve(id) else {
                debug!("selection {} ends the session", id);
                break;
            };
            debug!(
                "selected {:?}, collecting {} operand(s)",
                operation,
                operation.arity().operand_count()
            );

            let operands = match console::collect_operands(&mut self.console, operation.arity()) {
                Ok(operands) => operands,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            };

            match operation.run(&operands) {
                Ok(result) => println!("Result: {}", result),
                Err(err) => println!("Error: {}", err),
            }
        }

        Ok(())
    }
}
