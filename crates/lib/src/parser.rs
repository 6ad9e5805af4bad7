//! # Response Parser
//!
//! Turns the free-text answer of a language model into an ordered list of
//! [`QuestionRecord`]s. The expected layout is
//!
//! ```text
//! Q1: <question, possibly over several lines>
//! Syllabus Unit: <unit label>
//!
//! Q2: ...
//! ```
//!
//! Models drift from this layout, so the parser is tolerant: a block that does
//! not fit is logged and dropped, every block that does fit is kept, and the
//! original order is preserved. An answer with no usable block yields an empty
//! list rather than an error.

use crate::types::{Difficulty, QuestionRecord};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Marks the start of a question block. Only a `Q<n>:` that opens a line counts,
/// so references such as "see Q3:" inside a question body stay in that body.
static QUESTION_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^[ \t]*Q(\d+):").expect("question marker pattern is valid")
});

/// The line that separates a question body from its unit label.
const UNIT_LINE: &str = "\nSyllabus Unit:";

/// The label stamped on every parsed record, whatever difficulty was requested.
pub const PARSED_DIFFICULTY: Difficulty = Difficulty::Moderate;

/// Why a candidate block was dropped.
#[derive(Error, Debug, PartialEq, Eq)]
enum ParseSkip {
    #[error("no 'Syllabus Unit:' line follows the question")]
    MissingUnitLine,
    #[error("question text is empty")]
    EmptyQuestion,
    #[error("syllabus unit is empty")]
    EmptyUnit,
}

/// Parses a model response into question records, skipping malformed blocks.
pub fn parse_questions(response_text: &str) -> Vec<QuestionRecord> {
    info!("Starting question parsing");
    let text = response_text.replace("\r\n", "\n");

    let markers: Vec<_> = QUESTION_MARKER.captures_iter(&text).collect();
    info!("Number of question candidates found: {}", markers.len());

    let mut questions = Vec::with_capacity(markers.len());
    for (index, caps) in markers.iter().enumerate() {
        let (Some(marker), Some(number)) = (caps.get(0), caps.get(1)) else {
            warn!("Could not decompose a question marker; skipping it");
            continue;
        };
        // A block never runs past the next question marker, so a unit label
        // also ends where the next question starts.
        let block_end = markers
            .get(index + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |next| next.start());

        match parse_block(&text[marker.end()..block_end]) {
            Ok((question_text, section)) => {
                debug!("Successfully parsed question {}", number.as_str());
                questions.push(QuestionRecord::new(
                    question_text,
                    section,
                    PARSED_DIFFICULTY,
                ));
            }
            Err(skip) => warn!("Could not parse question {}: {skip}", number.as_str()),
        }
    }

    info!("Total valid questions parsed: {}", questions.len());
    questions
}

/// Splits the text following a `Q<n>:` marker into trimmed question and unit.
fn parse_block(block: &str) -> Result<(String, String), ParseSkip> {
    let unit_at = block.find(UNIT_LINE).ok_or(ParseSkip::MissingUnitLine)?;

    let question = block[..unit_at].trim();
    if question.is_empty() {
        return Err(ParseSkip::EmptyQuestion);
    }

    let after_label = block[unit_at + UNIT_LINE.len()..].trim_start();
    let unit_end = after_label.find("\n\n").unwrap_or(after_label.len());
    let unit = after_label[..unit_end].trim();
    if unit.is_empty() {
        return Err(ParseSkip::EmptyUnit);
    }

    Ok((question.to_string(), unit.to_string()))
}
