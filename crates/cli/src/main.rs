//! # quizgen: Syllabus Question Generator
//!
//! This is the main entry point for the `quizgen` command-line interface.
//! All logic lives in the `quizgen_cli` library crate.

use anyhow::Result;
use clap::Parser;
use quizgen_cli::{run, Cli};
use tracing_subscriber::{fmt, EnvFilter};

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load .env so clap's env fallbacks can see it
    dotenvy::dotenv().ok();

    // 2. Setup logging on stderr, keeping stdout for the questions
    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(EnvFilter::from_default_env().add_directive("quizgen=info".parse()?))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // 3. Parse CLI arguments
    let cli = Cli::parse();

    // 4. Run the command; every failure becomes a message, never a panic
    if let Err(e) = run(cli).await {
        eprintln!("[quizgen error] {e}");
        std::process::exit(1);
    }

    Ok(())
}
