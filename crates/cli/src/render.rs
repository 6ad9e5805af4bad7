//! Output formatting for generated questions.

use quizgen::QuestionRecord;

/// Shown when the model's answer produced no usable question.
pub const NO_QUESTIONS_MESSAGE: &str =
    "No questions generated. Check the syllabus content or API key.";

/// Renders questions as numbered, markdown-flavoured text.
pub fn render_text(questions: &[QuestionRecord]) -> String {
    if questions.is_empty() {
        return format!("{NO_QUESTIONS_MESSAGE}\n");
    }

    let mut out = String::from("## Generated Theoretical Questions\n\n");
    for (i, question) in questions.iter().enumerate() {
        out.push_str(&format!("**{}. {}**\n", i + 1, question.text()));
        out.push_str(&format!("*Syllabus Unit:* {}\n", question.section()));
        out.push_str("---\n");
    }
    out
}

/// Renders questions as a pretty-printed JSON array.
pub fn render_json(questions: &[QuestionRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(questions)
}
