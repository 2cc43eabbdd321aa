//! One-shot command-line mode.

mod context;
mod flags;
pub mod prompts;
pub mod quiet;

use std::process::ExitCode;

pub use context::Context;
pub use flags::{ClassArgs, Cli, Command, GenerateArgs};

use crate::exits;

/// Run one subcommand and map the outcome to an exit code.
pub fn run(config: Option<std::path::PathBuf>, command: Command) -> ExitCode {
    if let Command::Generate(ref args) = command {
        quiet::set(args.quiet);
    }

    let mut ctx = Context::new(config);
    match ctx.run(command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            prompts::error(&e.to_string());
            exits::code_for(&e)
        }
    }
}
