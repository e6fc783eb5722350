//! Answer checking — grades a player's grid word by word.

use serde::{Deserialize, Serialize};

use crate::crossword::grid::{PlacedWord, GRID_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordStatus {
    Correct,
    Incorrect,
}

impl WordStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WordStatus::Correct => "correct",
            WordStatus::Incorrect => "incorrect",
        }
    }
}

/// Per-cell grading plus word totals.
///
/// `results` holds `""`, `"correct"` or `"incorrect"` for every cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerReport {
    pub results: Vec<Vec<String>>,
    pub correct_words: u32,
    pub incorrect_words: u32,
}

/// Grades `answers` (GRID_SIZE × GRID_SIZE, `""` for blank) against the placed words.
///
/// Only words with at least one letter entered are graded. A graded word marks
/// all of its cells; crossing cells take the status of the word graded last.
pub fn check_answers(placed: &[PlacedWord], answers: &[Vec<String>]) -> AnswerReport {
    let mut results = vec![vec![String::new(); GRID_SIZE]; GRID_SIZE];
    let mut correct_words = 0;
    let mut incorrect_words = 0;

    for word in placed {
        let cells: Vec<(usize, usize)> = word
            .cells()
            .filter(|&(row, col)| row < GRID_SIZE && col < GRID_SIZE)
            .collect();

        let entered: String = cells
            .iter()
            .map(|&(row, col)| answer_at(answers, row, col).unwrap_or(' '))
            .collect();

        if entered.trim().is_empty() {
            continue;
        }

        let status = if entered.trim().to_uppercase() == word.word.to_uppercase() {
            correct_words += 1;
            WordStatus::Correct
        } else {
            incorrect_words += 1;
            WordStatus::Incorrect
        };

        for (row, col) in cells {
            results[row][col] = status.as_str().to_string();
        }
    }

    AnswerReport {
        results,
        correct_words,
        incorrect_words,
    }
}

/// Most recent letter the player typed at (row, col), if any.
fn answer_at(answers: &[Vec<String>], row: usize, col: usize) -> Option<char> {
    answers
        .get(row)
        .and_then(|r| r.get(col))
        .and_then(|cell| cell.trim().chars().last())
}
