//! Shed - store and run parameterized shell commands.

use clap::Parser;
use colored::Colorize;

use shed::cli::{self, Cli};

fn main() {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose);

    if let Err(e) = cli::execute(cli.command, cli.shed_dir) {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}
