//! # quizgen
//!
//! Generates theoretical exam questions from syllabus text with a hosted
//! language model. The crate builds the prompt, calls the provider, and parses
//! the model's free-text answer into [`QuestionRecord`]s. PDF extraction lives in
//! `quizgen-pdf` and the command-line front end in `quizgen-cli`.

pub mod constants;
pub mod errors;
pub mod generator;
pub mod parser;
pub mod prompts;
pub mod providers;
pub mod types;

pub use errors::{GenerationError, PromptError};
pub use generator::QuestionGenerator;
pub use parser::parse_questions;
pub use types::{Difficulty, QuestionRecord, QuestionRequest};
