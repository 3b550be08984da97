//! docfacts CLI: fact checks for CUDA and PyTorch compatibility documentation.
//!
//! With no subcommand, runs every check against `README.md` and
//! `docs/CUDA_COMPATIBILITY.md` in the working directory. See
//! `docfacts --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};
use docfacts_core::config::DocfactsConfig;

fn main() {
    let cli = Cli::parse();

    let config = DocfactsConfig::load(&cli.root);
    let formatter: Box<dyn docfacts_output::OutputFormatter> = if cli.json {
        Box::new(docfacts_output::json::JsonFormatter)
    } else {
        Box::new(docfacts_output::human::HumanFormatter::from_config(&config.report))
    };

    let exit_code = match cli.command {
        None => commands::check::run(&*formatter, cli.verbose, &cli.root, None),
        Some(Commands::Check { name }) => {
            commands::check::run(&*formatter, cli.verbose, &cli.root, name)
        }
        Some(Commands::List) => commands::list::run(&*formatter),
        Some(Commands::Completion { shell }) => commands::completion::run(shell),
    };

    std::process::exit(exit_code);
}
