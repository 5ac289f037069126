use clap::Parser;
use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::{app::Application, console::ConsoleErr};

pub mod app;
pub mod console;
pub mod menu;
pub mod operations;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("{0}")]
    Console(ConsoleErr),
    #[error("{0}")]
    Readline(ReadlineError),
}

impl From<ConsoleErr> for CalcError {
    fn from(value: ConsoleErr) -> Self {
        Self::Console(value)
    }
}

impl From<ReadlineError> for CalcError {
    fn from(value: ReadlineError) -> Self {
        Self::Readline(value)
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn run() -> Result<(), CalcError> {
    let mut application = Application::new()?;
    application.run()?;
    Ok(())
}

fn main() {
    env_logger::init();
    let _args = Args::parse();

    if let Err(err) = run() {
        println!("Error: {}", err);
    }
}
