//! Axum route handlers for the Crossword API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::crossword::{check_answers, AnswerReport, Orientation, PlacedWord, GRID_SIZE};
use crate::errors::AppError;
use crate::generation::pipeline::{build_crossword, keywords_from_pdf, CrosswordResponse};
use crate::ingest::is_pdf_filename;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub placed_words: Vec<PlacedWord>,
    pub answers: Vec<Vec<String>>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /upload-pdf
///
/// Multipart upload with a `file` field holding a PDF. Keywords are extracted
/// from the document text and laid out as a crossword with clues.
pub async fn handle_upload_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<CrosswordResponse>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if !is_pdf_filename(&filename) {
            return Err(AppError::Validation("File must be a PDF".to_string()));
        }

        let bytes = field.bytes().await?;
        info!(filename = %filename, bytes = bytes.len(), "received document upload");

        let keywords = keywords_from_pdf(bytes).await?;
        let response = build_crossword(&keywords, state.definitions.as_ref()).await;
        return Ok(Json(response));
    }

    Err(AppError::Validation(
        "multipart field 'file' is required".to_string(),
    ))
}

/// POST /api/v1/crosswords
///
/// Builds a crossword straight from a keyword list, skipping document ingestion.
/// An empty or unusable list is not an error: it yields an empty grid.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<CrosswordResponse>, AppError> {
    let response = build_crossword(&request.keywords, state.definitions.as_ref()).await;
    Ok(Json(response))
}

/// POST /api/v1/crosswords/check
///
/// Grades a player's answers word by word.
pub async fn handle_check(Json(request): Json<CheckRequest>) -> Result<Json<AnswerReport>, AppError> {
    if let Some(word) = request.placed_words.iter().find(|w| !fits_grid(w)) {
        return Err(AppError::Validation(format!(
            "word '{}' does not fit a {GRID_SIZE}x{GRID_SIZE} grid",
            word.word
        )));
    }

    Ok(Json(check_answers(&request.placed_words, &request.answers)))
}

fn fits_grid(word: &PlacedWord) -> bool {
    let len = word.len();
    if len == 0 || word.start_row >= GRID_SIZE || word.start_col >= GRID_SIZE {
        return false;
    }
    match word.orientation {
        Orientation::Across => word.start_col + len <= GRID_SIZE,
        Orientation::Down => word.start_row + len <= GRID_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str, orientation: Orientation, row: usize, col: usize) -> PlacedWord {
        PlacedWord {
            word: text.to_string(),
            orientation,
            start_row: row,
            start_col: col,
            number: 1,
        }
    }

    #[test]
    fn test_fits_grid() {
        assert!(fits_grid(&word("ABC", Orientation::Across, 0, 17)));
        assert!(!fits_grid(&word("ABC", Orientation::Across, 0, 18)));
        assert!(fits_grid(&word("ABC", Orientation::Down, 17, 0)));
        assert!(!fits_grid(&word("ABC", Orientation::Down, 18, 0)));
        assert!(!fits_grid(&word("", Orientation::Down, 0, 0)));
        assert!(!fits_grid(&word("ABC", Orientation::Across, usize::MAX, 0)));
    }
}
