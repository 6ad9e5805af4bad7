//! # quizgen-pdf: Syllabus Text Extraction
//!
//! Pulls the text layer out of a syllabus PDF so it can be embedded in a
//! question generation prompt. Extraction is all-or-nothing: a document that
//! cannot be read, or that has no text to read, is reported as an error and no
//! partial text is returned.

use pdf::content::{Op, TextDrawAdjusted};
use pdf::file::FileOptions;
use quizgen::constants::EXTRACT_PREVIEW_CHARS;
use std::path::Path;
use thiserror::Error;
use tracing::{error, info, instrument};

/// Kerning adjustments (thousandths of an em) wider than this are treated as a word gap.
const WORD_GAP_THRESHOLD: f32 = -200.0;

// --- Error Definitions ---

#[derive(Error, Debug)]
pub enum PdfExtractError {
    #[error("The PDF document is empty")]
    EmptyInput,
    #[error("Failed to read PDF file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse PDF content: {0}")]
    PdfParse(String),
    #[error("The PDF has no extractable text layer ({pages} page(s) scanned); it may be image-only")]
    NoTextLayer { pages: u32 },
}

// --- Core Extraction Logic ---

/// Extracts the text of every page, in page order.
///
/// Fails on empty input, unreadable or password-protected documents, any page
/// whose content stream cannot be decoded, and documents without a text layer.
#[instrument(skip(pdf_data), fields(bytes = pdf_data.len()))]
pub fn extract_text_from_pdf(pdf_data: &[u8]) -> Result<String, PdfExtractError> {
    info!("Starting PDF text extraction");
    let result = extract_pages(pdf_data);
    if let Err(e) = &result {
        error!("Failed to extract text from PDF. Error: {e}");
    }
    result
}

/// Reads a PDF from disk and extracts its text.
pub fn extract_text_from_path(path: &Path) -> Result<String, PdfExtractError> {
    info!("Reading PDF file: {}", path.display());
    let pdf_data = std::fs::read(path)?;
    extract_text_from_pdf(&pdf_data)
}

fn extract_pages(pdf_data: &[u8]) -> Result<String, PdfExtractError> {
    if pdf_data.is_empty() {
        return Err(PdfExtractError::EmptyInput);
    }

    let file = FileOptions::cached()
        .load(pdf_data)
        .map_err(|e| PdfExtractError::PdfParse(e.to_string()))?;
    let resolver = file.resolver();
    let total_pages = file.num_pages();
    info!("Total pages in PDF: {}", total_pages);

    let mut full_text = String::new();
    for page_num in 0..total_pages {
        let page = file
            .get_page(page_num)
            .map_err(|e| PdfExtractError::PdfParse(format!("page {}: {e}", page_num + 1)))?;
        let Some(content) = &page.contents else {
            continue;
        };
        let operations = content
            .operations(&resolver)
            .map_err(|e| PdfExtractError::PdfParse(format!("page {}: {e}", page_num + 1)))?;
        push_page_text(&operations, &mut full_text);
    }

    if full_text.trim().is_empty() {
        return Err(PdfExtractError::NoTextLayer { pages: total_pages });
    }

    log_preview(&full_text);
    Ok(full_text)
}

/// Appends the text shown by one page's content stream.
fn push_page_text(operations: &[Op], out: &mut String) {
    for op in operations {
        match op {
            Op::TextDraw { text } => out.push_str(&text.to_string_lossy()),
            Op::TextDrawAdjusted { array } => {
                for item in array {
                    match item {
                        TextDrawAdjusted::Text(text) => out.push_str(&text.to_string_lossy()),
                        TextDrawAdjusted::Spacing(gap) if *gap < WORD_GAP_THRESHOLD => {
                            out.push(' ')
                        }
                        TextDrawAdjusted::Spacing(_) => {}
                    }
                }
            }
            Op::TextNewline | Op::EndText => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

/// Logs the start of the extracted text so operators can see what was read.
fn log_preview(text: &str) {
    let char_count = text.chars().count();
    let preview: String = text.chars().take(EXTRACT_PREVIEW_CHARS).collect();
    info!("Extracted Text Preview (first {EXTRACT_PREVIEW_CHARS} characters):");
    if char_count > EXTRACT_PREVIEW_CHARS {
        info!("{preview}...");
    } else {
        info!("{preview}");
    }
    info!("Total extracted text length: {} characters", char_count);
}
