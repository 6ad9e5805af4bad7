//! The extract → generate → parse pipeline behind one `quizgen generate` call.

use quizgen::providers::ai::AiProvider;
use quizgen::{GenerationError, PromptError, QuestionGenerator, QuestionRecord, QuestionRequest};
use quizgen_pdf::{extract_text_from_path, extract_text_from_pdf, PdfExtractError};
use std::path::Path;
use thiserror::Error;
use tracing::{info, instrument};

/// A failure at one of the pipeline's steps, ready to show to the user.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Failed to extract text from PDF. Error: {0}")]
    Extraction(#[from] PdfExtractError),
    #[error("Error generating questions: {0}")]
    Generation(#[from] GenerationError),
}

impl From<PromptError> for PipelineError {
    fn from(err: PromptError) -> Self {
        PipelineError::Generation(GenerationError::Provider(err))
    }
}

/// Runs one request: extracts the syllabus, asks the provider, parses the answer.
///
/// Extraction failures stop the pipeline before the provider is called.
#[instrument(skip(pdf_data, ai_provider))]
pub async fn run_pipeline(
    pdf_data: &[u8],
    ai_provider: &dyn AiProvider,
    request: &QuestionRequest,
) -> Result<Vec<QuestionRecord>, PipelineError> {
    let syllabus_text = extract_text_from_pdf(pdf_data)?;
    generate_from_syllabus(&syllabus_text, ai_provider, request).await
}

/// Same as [`run_pipeline`], reading the PDF from `pdf_path`.
#[instrument(skip(ai_provider))]
pub async fn run_pipeline_from_path(
    pdf_path: &Path,
    ai_provider: &dyn AiProvider,
    request: &QuestionRequest,
) -> Result<Vec<QuestionRecord>, PipelineError> {
    let syllabus_text = extract_text_from_path(pdf_path)?;
    generate_from_syllabus(&syllabus_text, ai_provider, request).await
}

async fn generate_from_syllabus(
    syllabus_text: &str,
    ai_provider: &dyn AiProvider,
    request: &QuestionRequest,
) -> Result<Vec<QuestionRecord>, PipelineError> {
    info!("Text extraction completed successfully");

    let generator = QuestionGenerator::new(ai_provider);
    let questions = generator
        .generate_questions(syllabus_text, request)
        .await?;
    info!(
        "Pipeline finished with {} of {} requested questions",
        questions.len(),
        request.count
    );
    Ok(questions)
}
