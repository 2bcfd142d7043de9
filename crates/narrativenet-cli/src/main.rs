//! `narrativenet`: drive the NarrativeNet theme preference from a terminal.

mod commands;

use clap::Parser;
use tracing::level_filters::LevelFilter;

use commands::Cli;

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(level_for(cli.verbose))
        .with_writer(std::io::stderr)
        .init();

    match commands::run(&cli) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
