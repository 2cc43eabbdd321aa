use std::process::ExitCode;

use clap::Parser;

mod cli;
mod exits;
mod terminal;
mod tui;

use cli::Cli;
use passgen::settings;

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("PASSGEN_LOG", "warn"))
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    init_logging();
    exits::install_handlers();
    exits::disable_core_dumps();

    let cli = Cli::parse();

    match cli.command {
        None => tui::run(&cli.config.unwrap_or_else(settings::path)),
        Some(command) => cli::run(cli.config, command),
    }
}
