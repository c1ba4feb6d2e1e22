//! nearby CLI entry point
//!
//! Nearest places lookup - CLI + web API

use nearby::cli;

#[tokio::main]
async fn main() {
    if let Err(e) = cli::run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
