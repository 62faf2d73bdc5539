use clap::Parser;
use metar_decoder::cli::{Args, run};
use std::process;

fn main() {
    let args = Args::parse();

    match run(args) {
        Ok(stats) if stats.is_clean() => process::exit(0),
        Ok(_stats) => {
            // Failures have already been listed by the command
            process::exit(1);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(2);
        }
    }
}
