//! btckey - Convert Bitcoin keys and addresses.

use btckey::commands::Cli;
use clap::Parser;
use colored::Colorize;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = cli.execute() {
        eprintln!("{} {e}", "error:".red().bold());
        std::process::exit(1);
    }
}
