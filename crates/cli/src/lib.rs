//! # `quizgen` CLI Library Crate
//!
//! Command-line front end for generating theoretical exam questions from a
//! syllabus PDF. The binary in `main.rs` only sets up logging and calls [`run`].

pub mod pipeline;
pub mod render;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use quizgen::constants::{DEFAULT_QUESTION_COUNT, EXTRACT_PREVIEW_CHARS, MAX_QUESTIONS};
use quizgen::providers::factory::{create_provider, ProviderConfig, ProviderKind};
use quizgen::{Difficulty, QuestionRequest};
use quizgen_pdf::extract_text_from_path;
use std::path::PathBuf;
use tracing::info;

pub use pipeline::{run_pipeline, run_pipeline_from_path, PipelineError};
pub use render::{render_json, render_text, NO_QUESTIONS_MESSAGE};

/// The smallest question count offered on the command line.
pub const MIN_CLI_QUESTIONS: u32 = 5;

// --- CLI Argument Structs ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate theoretical questions from a syllabus PDF
    Generate(GenerateArgs),
    /// Print the text extracted from a syllabus PDF
    Extract(ExtractArgs),
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to the syllabus PDF.
    pub pdf: PathBuf,
    /// API key for the generation service.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
    /// Which generation service to call.
    #[arg(long, value_enum, default_value_t = ProviderArg::Gemini)]
    pub provider: ProviderArg,
    /// Overrides the service endpoint. Required for the local provider.
    #[arg(long, env = "QUIZGEN_API_URL")]
    pub api_url: Option<String>,
    /// Model name to request.
    #[arg(long, env = "QUIZGEN_MODEL")]
    pub model: Option<String>,
    /// Question difficulty: easy, moderate or hard (case-insensitive).
    #[arg(short, long, default_value = "moderate", value_parser = parse_difficulty)]
    pub difficulty: Difficulty,
    /// Number of questions to request.
    #[arg(
        short = 'n',
        long,
        default_value_t = DEFAULT_QUESTION_COUNT,
        value_parser = clap::value_parser!(u32).range(MIN_CLI_QUESTIONS as i64..=MAX_QUESTIONS as i64)
    )]
    pub count: u32,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Path to the syllabus PDF.
    pub pdf: PathBuf,
    /// Print only the first characters of the text.
    #[arg(long)]
    pub preview: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderArg {
    Gemini,
    Local,
}

impl From<ProviderArg> for ProviderKind {
    fn from(value: ProviderArg) -> Self {
        match value {
            ProviderArg::Gemini => ProviderKind::Gemini,
            ProviderArg::Local => ProviderKind::Local,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_difficulty(value: &str) -> Result<Difficulty, String> {
    value.parse().map_err(|e: quizgen::GenerationError| e.to_string())
}

// --- Public Entrypoint ---

/// The main entry point for the `quizgen` library.
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(args) => handle_generate(args).await,
        Commands::Extract(args) => handle_extract(args),
    }
}

// --- Command Handlers ---

/// Handles the `quizgen generate` command logic.
async fn handle_generate(args: GenerateArgs) -> Result<()> {
    info!(
        "Starting 'generate' for '{}' ({} {} questions)",
        args.pdf.display(),
        args.count,
        args.difficulty
    );

    let request = QuestionRequest::new(args.difficulty, args.count)?;
    let provider_config = ProviderConfig {
        kind: args.provider.into(),
        api_key: args.api_key,
        api_url: args.api_url,
        model: args.model,
    };
    // Built per invocation and dropped when this command returns.
    let ai_provider = create_provider(&provider_config).map_err(PipelineError::from)?;

    let questions = run_pipeline_from_path(&args.pdf, ai_provider.as_ref(), &request).await?;

    let output = match args.format {
        OutputFormat::Text => render_text(&questions),
        OutputFormat::Json => render_json(&questions)?,
    };
    println!("{}", output.trim_end());
    Ok(())
}

/// Handles the `quizgen extract` command logic.
fn handle_extract(args: ExtractArgs) -> Result<()> {
    let text = extract_text_from_path(&args.pdf).map_err(PipelineError::from)?;
    if args.preview {
        let preview: String = text.chars().take(EXTRACT_PREVIEW_CHARS).collect();
        println!("{preview}");
    } else {
        println!("{text}");
    }
    Ok(())
}
