//! Raise a mountain from the default plane and print its measures.
//!
//! Set `RUST_LOG=debug` to trace the pipeline.
use clap::Parser;
use mountain::{Config, Mountain};
use rand::{rngs::StdRng, SeedableRng};
use std::process::ExitCode;

/// Raise a randomized mountain and report its volume and areas.
#[derive(Parser)]
#[command(name = "mountain")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the elevations, for a reproducible mountain. Without one the thread RNG is used.
    seed: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::init();

    let config = Config::default();
    let result = match cli.seed {
        Some(seed) => {
            log::debug!("using seed {}", seed);
            Mountain::generate(&config, &mut StdRng::seed_from_u64(seed))
        }
        None => Mountain::generate(&config, &mut rand::thread_rng()),
    };

    match result {
        Ok(mountain) => {
            println!("{}", mountain.measures());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to raise mountain: {}", e);
            ExitCode::FAILURE
        }
    }
}
