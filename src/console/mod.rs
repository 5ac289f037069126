use rustyline::{DefaultEditor, error::ReadlineError};
use thiserror::Error;

use crate::operations::Arity;

pub const SELECT_PROMPT: &str = "Select an operation: ";
pub const NUMBER_PROMPT: &str = "Enter a number: ";
pub const FIRST_PROMPT: &str = "Enter the first number: ";
pub const SECOND_PROMPT: &str = "Enter the second number: ";

const RETRY_MESSAGE: &str = "Error: Invalid number format. Please enter the number again.";

#[derive(Error, Debug)]
pub enum ConsoleErr {
    #[error("Invalid number format.")]
    InvalidNumber,
    #[error("{0}")]
    Readline(ReadlineError),
}

impl From<ReadlineError> for ConsoleErr {
    fn from(value: ReadlineError) -> Self {
        Self::Readline(value)
    }
}

/// Seam over line-oriented prompting, so collection logic can be exercised
/// without a terminal.
pub trait Prompt {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError>;
}

pub struct Console {
    editor: DefaultEditor,
}

impl Console {
    pub fn new() -> Result<Self, ReadlineError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompt for Console {
    fn read_line(&mut self, prompt: &str) -> Result<String, ReadlineError> {
        self.editor.readline(prompt)
    }
}

/// Menu selection: one line, parsed as an integer. Unparsable text is a
/// reportable error, never an exit.
pub fn read_index<P: Prompt>(prompt: &mut P) -> Result<i64, ConsoleErr> {
    let line = prompt.read_line(SELECT_PROMPT)?;
    line.trim()
        .parse::<i64>()
        .map_err(|_| ConsoleErr::InvalidNumber)
}

/// One operand: re-prompts until the line parses as a float.
pub fn read_number<P: Prompt>(prompt: &mut P, label: &str) -> Result<f64, ReadlineError> {
    loop {
        let line = prompt.read_line(label)?;
        match line.trim().parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("{}", RETRY_MESSAGE),
        }
    }
}

pub fn collect_operands<P: Prompt>(
    prompt: &mut P,
    arity: Arity,
) -> Result<Vec<f64>, ReadlineError> {
    Ok(match arity {
        Arity::Unary => vec![read_number(prompt, NUMBER_PROMPT)?],
        Arity::Binary => vec![
            read_number(prompt, FIRST_PROMPT)?,
            read_number(prompt, SECOND_PROMPT)?,
        ],
    })
}
