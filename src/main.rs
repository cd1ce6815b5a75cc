use clap::Parser;
use smartsort::cli::{Cli, run};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
    }
}
