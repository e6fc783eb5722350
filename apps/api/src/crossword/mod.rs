// Crossword engine: candidate selection, grid placement, clue numbering.
// Pure and synchronous. Every call builds its own Grid; nothing is shared.

pub mod checking;
pub mod grid;
pub mod numbering;
pub mod placement;
pub mod selector;

use serde::Serialize;
use tracing::info;

pub use checking::{check_answers, AnswerReport};
pub use grid::{Grid, Orientation, PlacedWord, GRID_SIZE};
pub use numbering::number_words;
pub use placement::{place_words, MAX_PLACED_WORDS};
pub use selector::{select_candidates, MAX_CANDIDATES};

/// A finished puzzle: the answer grid and its numbered words in reading order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Crossword {
    pub grid: Grid,
    pub placed_words: Vec<PlacedWord>,
}

/// Selects candidates from `keywords`, places them, and numbers the result.
///
/// Never fails: unusable input simply yields an empty grid.
pub fn generate_crossword<S: AsRef<str>>(keywords: &[S]) -> Crossword {
    let candidates = select_candidates(keywords);
    let candidate_count = candidates.len();

    let (grid, placed) = place_words(candidates);
    let placed_words = number_words(&grid, placed);

    info!(
        keywords = keywords.len(),
        candidates = candidate_count,
        placed = placed_words.len(),
        "crossword generated"
    );

    Crossword { grid, placed_words }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_no_conflicts(crossword: &Crossword) {
        for word in &crossword.placed_words {
            for ((row, col), letter) in word.cells().zip(word.word.chars()) {
                assert!(row < GRID_SIZE && col < GRID_SIZE);
                assert_eq!(crossword.grid.get(row, col), Some(letter));
            }
        }
    }

    #[test]
    fn test_python_example() {
        let crossword = generate_crossword(&["PYTHON", "SNAKE", "TYPE"]);
        let seed = crossword
            .placed_words
            .iter()
            .find(|w| w.word == "PYTHON")
            .expect("seed word is always placed");
        assert_eq!(seed.orientation, Orientation::Across);
        assert_eq!((seed.start_row, seed.start_col), (10, 7));
        assert!(crossword.placed_words.len() >= 2);
        assert_no_conflicts(&crossword);
    }

    #[test]
    fn test_too_short_words_give_empty_puzzle() {
        let crossword = generate_crossword(&["AB", "CD"]);
        assert!(crossword.grid.is_empty());
        assert!(crossword.placed_words.is_empty());
    }

    #[test]
    fn test_forty_words_respect_caps() {
        let vocabulary = [
            "algorithm", "binary", "compiler", "database", "encryption", "firmware", "gateway",
            "hardware", "interface", "javascript", "kernel", "latency", "middleware", "network",
            "operator", "protocol", "query", "runtime", "software", "terminal", "unicode",
            "variable", "website", "xenon", "yielding", "zipfile", "abstract", "boolean",
            "cache", "daemon", "element", "function", "generic", "hashing", "iterator",
            "journal", "keyword", "lambda", "module", "namespace",
        ];
        assert_eq!(vocabulary.len(), 40);
        assert_eq!(select_candidates(&vocabulary).len(), MAX_CANDIDATES);

        let crossword = generate_crossword(&vocabulary);
        assert!(crossword.placed_words.len() <= MAX_PLACED_WORDS);
        assert!(crossword.placed_words.len() > 1);
        assert_no_conflicts(&crossword);
    }

    #[test]
    fn test_numbers_contiguous_and_shared() {
        let crossword = generate_crossword(&[
            "ENGINEERING", "TRAINING", "REGISTER", "NETWORK", "STRING", "GRAPH", "TENSOR",
        ]);
        let mut starts: Vec<((usize, usize), u32)> = crossword
            .placed_words
            .iter()
            .map(|w| ((w.start_row, w.start_col), w.number))
            .collect();
        starts.sort();
        starts.dedup();

        // One number per distinct start cell, numbered 1..=n in reading order.
        let numbers: Vec<u32> = starts.iter().map(|(_, n)| *n).collect();
        let expected: Vec<u32> = (1..=numbers.len() as u32).collect();
        assert_eq!(numbers, expected);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let keywords = ["planet", "orbit", "galaxy", "comet", "nebula", "gravity", "meteor"];
        assert_eq!(generate_crossword(&keywords), generate_crossword(&keywords));
    }

    #[test]
    fn test_renumbering_output_is_stable() {
        let crossword = generate_crossword(&["planet", "orbit", "galaxy", "comet", "nebula"]);
        let renumbered = number_words(&crossword.grid, crossword.placed_words.clone());
        assert_eq!(renumbered, crossword.placed_words);
    }
}
