//! stoplist CLI binary.

use std::io::Write;
use std::process;

use anyhow::Context;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

use stoplist::cli::args::*;
use stoplist::cli::commands::*;

fn main() {
    let args = StoplistArgs::parse();

    let log_level = match args.verbosity() {
        0 => LevelFilter::Error, // Quiet mode
        1 => LevelFilter::Warn,  // Default
        2 => LevelFilter::Info,  // Verbose
        _ => LevelFilter::Debug, // Very verbose (3+)
    };

    Builder::new()
        .filter_level(log_level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();

    if let Err(e) = run(args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(args: StoplistArgs) -> anyhow::Result<()> {
    let name = command_name(&args.command);
    execute_command(args).with_context(|| format!("'{name}' failed"))
}

fn command_name(command: &Command) -> &'static str {
    match command {
        Command::Add(_) => "add",
        Command::Remove(_) => "remove",
        Command::Check(_) => "check",
        Command::Stats(_) => "stats",
        Command::Tokens(_) => "tokens",
        Command::Freq(_) => "freq",
        Command::Process(_) => "process",
        Command::Types(_) => "types",
    }
}
