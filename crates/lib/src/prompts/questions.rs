//! # Question Generation Prompts
//!
//! The instruction sent to the model when generating theoretical questions from
//! a syllabus. The layout requested here is the one
//! [`crate::parser::parse_questions`] understands.

use crate::types::Difficulty;

/// The question generation prompt.
///
/// Placeholders: `{num_questions}`, `{difficulty}`, `{syllabus_text}`
pub const QUESTION_GENERATION_PROMPT: &str = r#"You are an expert in generating educational theoretical questions.
Create exactly {num_questions} {difficulty} difficulty theoretical questions based on this syllabus content:

{syllabus_text}

Guidelines:
- Generate thought-provoking theoretical questions
- Each question should be unique and directly related to the syllabus
- Provide the syllabus unit for each question
- Ensure questions encourage deep thinking and analysis

Format your response as:
Q1: [Question Text]
Syllabus Unit: [Relevant Unit]

Q2: [Question Text]
Syllabus Unit: [Relevant Unit]

Continue this pattern for all questions, leaving one blank line between questions."#;

/// Fills [`QUESTION_GENERATION_PROMPT`] for one request.
///
/// The output depends only on the arguments.
pub fn build_question_prompt(syllabus_text: &str, difficulty: Difficulty, count: u32) -> String {
    QUESTION_GENERATION_PROMPT
        .replace("{num_questions}", &count.to_string())
        .replace("{difficulty}", difficulty.prompt_label())
        .replace("{syllabus_text}", syllabus_text.trim())
}
