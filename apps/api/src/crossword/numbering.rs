//! Numbering Pass — assigns clue numbers to word-start cells in reading order.

use std::collections::HashMap;

use crate::crossword::grid::{Grid, Orientation, PlacedWord};

/// Numbers position-sorted words and drops any word left unnumbered.
///
/// A start cell is numbered when it is a true start for the word's
/// orientation (nothing to the left for across, nothing above for down).
/// Words that share a start cell share its number. Numbering always restarts
/// at 1, so running it again over its own output changes nothing.
pub fn number_words(grid: &Grid, mut placed: Vec<PlacedWord>) -> Vec<PlacedWord> {
    let mut numbered_cells: HashMap<(usize, usize), u32> = HashMap::new();
    let mut next_number = 1;

    for word in &mut placed {
        let (row, col) = (word.start_row, word.start_col);
        word.number = 0;

        if !is_true_start(grid, word) {
            continue;
        }
        word.number = *numbered_cells.entry((row, col)).or_insert_with(|| {
            let number = next_number;
            next_number += 1;
            number
        });
    }

    placed.retain(|w| w.number > 0);
    placed
}

/// Whether the cell before the word's start (along its orientation) is empty or off-board.
fn is_true_start(grid: &Grid, word: &PlacedWord) -> bool {
    let (row, col) = (word.start_row, word.start_col);
    match word.orientation {
        Orientation::Across => col == 0 || grid.get(row, col - 1).is_none(),
        Orientation::Down => row == 0 || grid.get(row - 1, col).is_none(),
    }
}
