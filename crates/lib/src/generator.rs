//! # Question Generator
//!
//! Builds the prompt for one request, sends it to the configured provider once,
//! and hands the raw answer to the parser.

use crate::{
    errors::GenerationError,
    parser::parse_questions,
    prompts::questions::build_question_prompt,
    providers::ai::AiProvider,
    types::{QuestionRecord, QuestionRequest},
};
use tracing::{debug, info, instrument};

/// Generates theoretical questions from syllabus text with a borrowed provider.
pub struct QuestionGenerator<'a> {
    ai_provider: &'a dyn AiProvider,
}

impl<'a> QuestionGenerator<'a> {
    pub fn new(ai_provider: &'a dyn AiProvider) -> Self {
        Self { ai_provider }
    }

    /// Runs one generation request.
    ///
    /// The model is not guaranteed to return `request.count` questions; whatever
    /// the parser accepts is returned, possibly an empty list.
    #[instrument(skip(self, syllabus_text), fields(syllabus_len = syllabus_text.len()))]
    pub async fn generate_questions(
        &self,
        syllabus_text: &str,
        request: &QuestionRequest,
    ) -> Result<Vec<QuestionRecord>, GenerationError> {
        request.validate()?;
        if syllabus_text.trim().is_empty() {
            return Err(GenerationError::EmptySyllabus);
        }

        info!(
            "Starting theoretical question generation - Difficulty: {}, Number of Questions: {}",
            request.difficulty, request.count
        );
        let prompt = build_question_prompt(syllabus_text, request.difficulty, request.count);

        info!("Sending prompt to AI provider...");
        let response_text = self.ai_provider.generate(&prompt).await?;
        info!("Questions generation completed");
        debug!("Full response text: {}", response_text);

        Ok(parse_questions(&response_text))
    }
}
