//! cachetic - Entry Point
//!
//! Command line access to any configured cache backend. Values are read
//! and written as text.

// Force-link cachetic-providers to ensure linkme registrations are included
extern crate cachetic_providers;

use cachetic::cli::{Cli, run};
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
