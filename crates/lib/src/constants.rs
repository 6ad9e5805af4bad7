//! # Shared Constants
//!
//! Values shared by the library and the `quizgen` binary, kept in one place so
//! the CLI defaults and the library validation never drift apart.

/// The upper bound on questions requested in a single generation call.
pub const MAX_QUESTIONS: u32 = 50;

/// The number of questions requested when the caller does not say otherwise.
pub const DEFAULT_QUESTION_COUNT: u32 = 10;

/// The Gemini model used when none is configured.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Base URL of the Generative Language REST API.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// How many characters of extracted syllabus text are echoed to the log.
pub const EXTRACT_PREVIEW_CHARS: usize = 500;

/// Builds the `generateContent` endpoint for a Gemini model.
pub fn gemini_generate_url(model_name: &str) -> String {
    format!("{GEMINI_API_BASE}/{model_name}:generateContent")
}
