//! # Prompt Generation Tests
//!
//! Validates that `build_question_prompt` embeds the request parameters and
//! asks for the layout the response parser understands.

use quizgen::prompts::questions::build_question_prompt;
use quizgen::Difficulty;

/// Verifies that count, lowercase difficulty and syllabus text all reach the prompt.
#[test]
fn test_prompt_embeds_all_parameters() {
    let prompt = build_question_prompt("Unit 1: Sorting\nUnit 2: Graphs", Difficulty::Hard, 12);

    assert!(prompt.contains("Create exactly 12 hard difficulty theoretical questions"));
    assert!(prompt.contains("Unit 1: Sorting\nUnit 2: Graphs"));
    assert!(!prompt.contains("{num_questions}"));
    assert!(!prompt.contains("{difficulty}"));
    assert!(!prompt.contains("{syllabus_text}"));
}

/// Verifies that the requested layout matches the `Q<n>:` / `Syllabus Unit:` format.
#[test]
fn test_prompt_requests_parseable_layout() {
    let prompt = build_question_prompt("Operating systems", Difficulty::Easy, 5);

    assert!(prompt.contains("Q1: [Question Text]\nSyllabus Unit: [Relevant Unit]\n\nQ2:"));
}

/// Verifies that the same inputs always produce the same prompt.
#[test]
fn test_prompt_is_deterministic() {
    let first = build_question_prompt("Compilers", Difficulty::Moderate, 10);
    let second = build_question_prompt("Compilers", Difficulty::Moderate, 10);

    assert_eq!(first, second);
}

/// Verifies that placeholder-looking text inside the syllabus is left untouched.
#[test]
fn test_syllabus_placeholders_are_not_expanded() {
    let prompt = build_question_prompt("Templates use {difficulty} markers", Difficulty::Easy, 5);

    assert!(prompt.contains("Templates use {difficulty} markers"));
}
