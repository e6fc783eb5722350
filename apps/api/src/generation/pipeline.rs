//! Generation pipeline — orchestrates ingestion, the crossword engine, and clue lookup.
//!
//! Flow: upload bytes → extract_text (spawn_blocking) → extract_keywords →
//!       generate_crossword → generate_clues → CrosswordResponse.

use std::collections::BTreeMap;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

use crate::clues::{generate_clues, DefinitionLookup};
use crate::crossword::{generate_crossword, Grid, PlacedWord};
use crate::errors::AppError;
use crate::ingest::{extract_keywords, extract_text, IngestError};

/// A playable puzzle as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct CrosswordResponse {
    pub puzzle_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub grid: Grid,
    pub placed_words: Vec<PlacedWord>,
    /// Keyed by word text; one entry per distinct placed word.
    pub clues: BTreeMap<String, String>,
}

/// Runs the engine over `keywords` and attaches a clue to every placed word.
pub async fn build_crossword(
    keywords: &[String],
    definitions: &dyn DefinitionLookup,
) -> CrosswordResponse {
    let crossword = generate_crossword(keywords);
    if !crossword.grid.is_empty() {
        debug!("answer key:\n{}", crossword.grid);
    }

    let words: Vec<&str> = crossword
        .placed_words
        .iter()
        .map(|w| w.word.as_str())
        .collect();
    let clues = generate_clues(&words, definitions).await;

    let response = CrosswordResponse {
        puzzle_id: Uuid::new_v4(),
        generated_at: Utc::now(),
        grid: crossword.grid,
        placed_words: crossword.placed_words,
        clues,
    };
    info!(
        puzzle_id = %response.puzzle_id,
        words = response.placed_words.len(),
        "puzzle ready"
    );
    response
}

/// Extracts candidate keywords from an uploaded PDF.
///
/// Runs on the blocking pool: PDF parsing is CPU-bound and a panic inside the
/// parser must not take down the worker. A panic surfaces as 422.
pub async fn keywords_from_pdf(bytes: Bytes) -> Result<Vec<String>, AppError> {
    let keywords = tokio::task::spawn_blocking(move || {
        let text = extract_text(&bytes)?;
        Ok::<_, IngestError>(extract_keywords(&text))
    })
    .await
    .map_err(|e| {
        if e.is_panic() {
            AppError::UnprocessableEntity("PDF parser failed on this document".to_string())
        } else {
            AppError::Internal(anyhow::anyhow!("spawn_blocking failed in PDF extraction: {e}"))
        }
    })??;

    info!(keywords = keywords.len(), "keywords extracted from document");
    Ok(keywords)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clues::OfflineLookup;

    fn keywords(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[tokio::test]
    async fn test_every_placed_word_has_a_clue() {
        let response = build_crossword(
            &keywords(&["volcano", "magma", "crater", "lava", "eruption"]),
            &OfflineLookup,
        )
        .await;

        assert!(!response.placed_words.is_empty());
        for word in &response.placed_words {
            assert_eq!(
                response.clues.get(&word.word),
                Some(&crate::clues::fallback_clue(&word.word))
            );
        }
    }

    #[tokio::test]
    async fn test_empty_keywords_give_empty_puzzle() {
        let response = build_crossword(&[], &OfflineLookup).await;
        assert!(response.placed_words.is_empty());
        assert!(response.clues.is_empty());
        assert!(response.grid.is_empty());
    }

    #[tokio::test]
    async fn test_response_wire_shape() {
        let response = build_crossword(&keywords(&["PYTHON", "SNAKE", "TYPE"]), &OfflineLookup).await;
        let value = serde_json::to_value(&response).unwrap();

        assert!(value["puzzle_id"].is_string());
        assert!(value["generated_at"].is_string());
        assert_eq!(value["grid"][10][7], "P");
        let first = &value["placed_words"][0];
        for field in ["word", "orientation", "start_row", "start_col", "number"] {
            assert!(first.get(field).is_some(), "missing {field}");
        }
    }

    #[tokio::test]
    async fn test_non_pdf_upload_is_validation_error() {
        let result = keywords_from_pdf(Bytes::from_static(b"plain text")).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
