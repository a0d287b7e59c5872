//! cloudcmp - Browse and compare AWS services from the terminal
//!
//! This is the binary entry point. All logic lives in the library.

use clap::Parser;
use cloudcmp::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = cloudcmp::run(cli).await {
        eprintln!("Error: {}", e.user_message());
        std::process::exit(1);
    }
}
