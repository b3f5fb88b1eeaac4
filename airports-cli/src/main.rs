//! Binary crate for the `airports` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive prompts and configuration
//! - Human-friendly table output

use clap::Parser;

mod cli;
mod console;
mod logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env is fine; the key may come from the flag or config file.
    dotenv::dotenv().ok();

    let cmd = cli::Cli::parse();
    logging::setup_logging(cmd.log_level);
    cmd.run().await
}
