//! # PDF Extraction Tests
//!
//! Builds small PDFs in memory and checks that `extract_text_from_pdf`
//! returns their text in page order, or a defined error.

use anyhow::Result;
use quizgen_pdf::{extract_text_from_path, extract_text_from_pdf, PdfExtractError};
use quizgen_test_utils::helpers::generate_test_pdf;
use std::io::Write;
use std::sync::Once;

static INIT: Once = Once::new();

fn setup_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}

#[test]
fn test_single_page_text_is_extracted() -> Result<()> {
    // --- Arrange ---
    setup_tracing();
    let pdf_data = generate_test_pdf(&[Some("Unit 1: Sorting algorithms")])?;

    // --- Act ---
    let text = extract_text_from_pdf(&pdf_data)?;

    // --- Assert ---
    assert!(
        text.contains("Unit 1: Sorting algorithms"),
        "Unexpected text: {text:?}"
    );
    Ok(())
}

#[test]
fn test_pages_are_concatenated_in_order() -> Result<()> {
    setup_tracing();
    let pdf_data = generate_test_pdf(&[
        Some("Unit 1: Processes\nUnit 2: Threads"),
        Some("Unit 3: Scheduling"),
        Some("Unit 4: Memory (paging)"),
    ])?;

    let text = extract_text_from_pdf(&pdf_data)?;

    let positions: Vec<usize> = ["Unit 1", "Unit 2", "Unit 3", "Unit 4: Memory (paging)"]
        .iter()
        .map(|needle| text.find(needle).expect("page text missing"))
        .collect();
    assert!(
        positions.windows(2).all(|w| w[0] < w[1]),
        "Pages out of order: {text:?}"
    );
    // Separate text lines must not run together.
    assert!(!text.contains("ProcessesUnit 2"));
    Ok(())
}

#[test]
fn test_empty_input_is_a_defined_failure() {
    setup_tracing();
    let result = extract_text_from_pdf(&[]);
    assert!(matches!(result, Err(PdfExtractError::EmptyInput)));
}

#[test]
fn test_garbage_input_is_a_parse_failure() {
    setup_tracing();
    let result = extract_text_from_pdf(b"this is definitely not a pdf document");
    assert!(matches!(result, Err(PdfExtractError::PdfParse(_))));
}

#[test]
fn test_image_only_document_has_no_text_layer() -> Result<()> {
    setup_tracing();
    let pdf_data = generate_test_pdf(&[None, None])?;

    let result = extract_text_from_pdf(&pdf_data);

    assert!(matches!(
        result,
        Err(PdfExtractError::NoTextLayer { pages: 2 })
    ));
    Ok(())
}

#[test]
fn test_extract_from_path_reads_file() -> Result<()> {
    setup_tracing();
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(&generate_test_pdf(&[Some("Unit 9: Compilers")])?)?;

    let text = extract_text_from_path(file.path())?;

    assert!(text.contains("Unit 9: Compilers"));
    Ok(())
}

#[test]
fn test_missing_file_is_an_io_failure() {
    setup_tracing();
    let dir = tempfile::tempdir().unwrap();
    let result = extract_text_from_path(&dir.path().join("missing.pdf"));
    assert!(matches!(result, Err(PdfExtractError::Io(_))));
}
