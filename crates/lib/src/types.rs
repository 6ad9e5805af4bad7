use crate::{constants::MAX_QUESTIONS, errors::GenerationError};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The difficulty labels a caller can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Moderate,
    Hard,
}

impl Difficulty {
    /// All labels, in the order they are offered to users.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Moderate, Difficulty::Hard];

    /// The capitalized display label (`"Moderate"`).
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Moderate => "Moderate",
            Difficulty::Hard => "Hard",
        }
    }

    /// The lowercase form embedded in prompts (`"moderate"`).
    pub fn prompt_label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Moderate => "moderate",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GenerationError::UnknownDifficulty(s.to_string()))
    }
}

/// One question parsed out of a model response.
///
/// Records are only built by [`crate::parser::parse_questions`] and expose
/// read-only accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionRecord {
    text: String,
    section: String,
    difficulty: Difficulty,
}

impl QuestionRecord {
    pub(crate) fn new(text: String, section: String, difficulty: Difficulty) -> Self {
        Self {
            text,
            section,
            difficulty,
        }
    }

    /// The question body.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The syllabus unit label the model attached to the question.
    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

/// The user-selected parameters for one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionRequest {
    pub difficulty: Difficulty,
    pub count: u32,
}

impl QuestionRequest {
    /// Creates a request, rejecting counts outside `1..=MAX_QUESTIONS`.
    pub fn new(difficulty: Difficulty, count: u32) -> Result<Self, GenerationError> {
        let request = Self { difficulty, count };
        request.validate()?;
        Ok(request)
    }

    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.count == 0 || self.count > MAX_QUESTIONS {
            return Err(GenerationError::InvalidCount {
                count: self.count,
                max: MAX_QUESTIONS,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_parses_case_insensitively() {
        assert_eq!("HARD".parse::<Difficulty>().unwrap(), Difficulty::Hard);
        assert_eq!(" easy ".parse::<Difficulty>().unwrap(), Difficulty::Easy);
        assert_eq!("Moderate".parse::<Difficulty>().unwrap(), Difficulty::Moderate);
        assert!("extreme".parse::<Difficulty>().is_err());
    }

    #[test]
    fn request_rejects_out_of_range_counts() {
        assert!(QuestionRequest::new(Difficulty::Easy, 0).is_err());
        assert!(QuestionRequest::new(Difficulty::Easy, MAX_QUESTIONS + 1).is_err());
        assert!(QuestionRequest::new(Difficulty::Easy, MAX_QUESTIONS).is_ok());
    }
}
