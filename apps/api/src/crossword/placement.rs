//! Placement Engine — seeds the board and attaches words through intersections.
//!
//! # Algorithm
//! 1. The first word goes across, centred on the middle row. It is the only
//!    placement that does not need a crossing.
//! 2. Up to `MAX_PASSES` passes over the unplaced pool. Each candidate is tried
//!    perpendicular to every placed word at every shared letter; the highest
//!    scoring legal spot wins and is committed before the next candidate.
//!    Words that fail stay in the pool for the next pass.
//! 3. Whatever is still unplaced after the last pass is dropped.
//!
//! Placement is final: nothing is ever undone.

use tracing::debug;

use crate::crossword::grid::{Grid, Orientation, PlacedWord, GRID_SIZE};

/// Retry passes over the unplaced pool.
pub const MAX_PASSES: usize = 5;
/// Hard cap on words committed to one grid.
pub const MAX_PLACED_WORDS: usize = 20;

/// A legal spot for a candidate, with its intersection score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placement {
    row: isize,
    col: isize,
    orientation: Orientation,
    score: usize,
}

/// Owns the grid and the placed-word list for a single generation run.
#[derive(Debug, Default)]
pub struct PlacementEngine {
    grid: Grid,
    placed: Vec<PlacedWord>,
}

impl PlacementEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs seed + retry passes and returns the board with the placed words
    /// sorted by (start_row, start_col). Numbers are left at 0.
    pub fn place(mut self, mut words: Vec<String>) -> (Grid, Vec<PlacedWord>) {
        if words.is_empty() {
            return (self.grid, self.placed);
        }

        let seed: Vec<char> = words.remove(0).chars().collect();
        let row = GRID_SIZE / 2;
        let col = GRID_SIZE.saturating_sub(seed.len()) / 2;
        if !self
            .grid
            .can_place(&seed, row as isize, col as isize, Orientation::Across)
        {
            debug!(len = seed.len(), "seed word does not fit the board");
            return (self.grid, self.placed);
        }
        self.placed
            .push(self.grid.commit(&seed, row, col, Orientation::Across));

        let mut pool: Vec<Vec<char>> = words.iter().map(|w| w.chars().collect()).collect();

        for pass in 0..MAX_PASSES {
            if pool.is_empty() {
                break;
            }
            let before = self.placed.len();
            pool = self.run_pass(pool);
            debug!(
                pass = pass + 1,
                placed = self.placed.len() - before,
                remaining = pool.len(),
                "placement pass finished"
            );
        }

        if !pool.is_empty() {
            debug!(dropped = pool.len(), "words left unplaced after final pass");
        }

        self.placed.truncate(MAX_PLACED_WORDS);
        // Stable: words sharing a start cell keep commitment order.
        self.placed.sort_by_key(|w| (w.start_row, w.start_col));

        (self.grid, self.placed)
    }

    /// One pass over the pool. Returns the words that are still unplaced.
    fn run_pass(&mut self, pool: Vec<Vec<char>>) -> Vec<Vec<char>> {
        let mut remaining = Vec::with_capacity(pool.len());
        let mut iter = pool.into_iter();

        while let Some(word) = iter.next() {
            if self.placed.len() >= MAX_PLACED_WORDS {
                remaining.push(word);
                remaining.extend(iter);
                break;
            }
            match self.best_placement(&word) {
                Some(spot) => {
                    debug!(
                        row = spot.row,
                        col = spot.col,
                        score = spot.score,
                        "committing {:?} word",
                        spot.orientation
                    );
                    // `can_place` already proved the coordinates are on the board.
                    let placed = self.grid.commit(
                        &word,
                        spot.row as usize,
                        spot.col as usize,
                        spot.orientation,
                    );
                    self.placed.push(placed);
                }
                None => remaining.push(word),
            }
        }

        remaining
    }

    /// Best legal crossing for `word` against every placed word.
    ///
    /// Equal scores resolve to the spot found last (`>=`), which keeps output
    /// identical to previously generated puzzles.
    fn best_placement(&self, word: &[char]) -> Option<Placement> {
        let mut best: Option<Placement> = None;
        let mut max_score = 0;

        for anchor in &self.placed {
            let orientation = anchor.orientation.perpendicular();
            let (anchor_row, anchor_col) = (anchor.start_row as isize, anchor.start_col as isize);

            for (i, anchor_letter) in anchor.word.chars().enumerate() {
                for (j, &letter) in word.iter().enumerate() {
                    if anchor_letter != letter {
                        continue;
                    }
                    let (i, j) = (i as isize, j as isize);
                    let (row, col) = match anchor.orientation {
                        Orientation::Across => (anchor_row - j, anchor_col + i),
                        Orientation::Down => (anchor_row + i, anchor_col - j),
                    };
                    if !self.grid.can_place(word, row, col, orientation) {
                        continue;
                    }
                    let score = self.grid.score(word, row, col, orientation);
                    if score >= max_score {
                        max_score = score;
                        best = Some(Placement {
                            row,
                            col,
                            orientation,
                            score,
                        });
                    }
                }
            }
        }

        best
    }
}

/// Convenience wrapper: a fresh engine per call.
pub fn place_words(words: Vec<String>) -> (Grid, Vec<PlacedWord>) {
    PlacementEngine::new().place(words)
}
