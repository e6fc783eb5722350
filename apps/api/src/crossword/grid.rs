//! Grid — the fixed-size letter board and the placement primitives over it.
//!
//! Coordinates passed to `can_place` / `score` are signed: the engine derives a
//! candidate's start cell by subtracting a letter offset from an anchor cell, which
//! can land above or left of the board. Anything out of bounds is simply illegal.

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde::Deserialize;

/// Side length of the square board.
pub const GRID_SIZE: usize = 20;

/// Placement direction of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Across,
    Down,
}

impl Orientation {
    /// The orientation a crossing word must take.
    pub fn perpendicular(self) -> Self {
        match self {
            Orientation::Across => Orientation::Down,
            Orientation::Down => Orientation::Across,
        }
    }

    /// (row, col) step for one letter along this orientation.
    fn step(self) -> (isize, isize) {
        match self {
            Orientation::Across => (0, 1),
            Orientation::Down => (1, 0),
        }
    }
}

/// A word committed to the grid.
///
/// `number` stays 0 until the numbering pass runs.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct PlacedWord {
    pub word: String,
    pub orientation: Orientation,
    pub start_row: usize,
    pub start_col: usize,
    #[serde(default)]
    pub number: u32,
}

impl PlacedWord {
    /// Length in letters (chars, not bytes).
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }

    /// Cells occupied by the word, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col) = (self.start_row, self.start_col);
        let orientation = self.orientation;
        (0..self.len()).map(move |i| match orientation {
            Orientation::Across => (row, col + i),
            Orientation::Down => (row + i, col),
        })
    }
}

/// Square letter board. `None` is the empty marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Option<char>>>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    pub fn new() -> Self {
        Self {
            cells: vec![vec![None; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Letter at (row, col); `None` when empty or outside the board.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_none)
    }

    /// Signed lookup used by the legality checks. Out-of-bounds reads as empty.
    fn at(&self, row: isize, col: isize) -> Option<char> {
        if row < 0 || col < 0 {
            return None;
        }
        self.get(row as usize, col as usize)
    }

    fn in_bounds(row: isize, col: isize) -> bool {
        let size = GRID_SIZE as isize;
        (0..size).contains(&row) && (0..size).contains(&col)
    }

    /// Whether `word` can be written starting at (row, col) without breaking the board.
    ///
    /// Rules, in order:
    /// 1. The whole word fits inside the grid.
    /// 2. Every cell is empty or already holds the same letter.
    /// 3. Every cell the word would newly fill has empty perpendicular neighbours.
    /// 4. The cells just before the start and just after the end are empty.
    pub fn can_place(&self, word: &[char], row: isize, col: isize, orientation: Orientation) -> bool {
        if word.is_empty() {
            return false;
        }
        let (dr, dc) = orientation.step();
        let len = word.len() as isize;

        if !Self::in_bounds(row, col) || !Self::in_bounds(row + dr * (len - 1), col + dc * (len - 1)) {
            return false;
        }

        for (i, &letter) in word.iter().enumerate() {
            let (r, c) = (row + dr * i as isize, col + dc * i as isize);
            match self.at(r, c) {
                Some(existing) if existing != letter => return false,
                Some(_) => {}
                None => {
                    // Sideways neighbours: swap the step to look across the word.
                    if self.at(r - dc, c - dr).is_some() || self.at(r + dc, c + dr).is_some() {
                        return false;
                    }
                }
            }
        }

        let before = self.at(row - dr, col - dc);
        let after = self.at(row + dr * len, col + dc * len);
        before.is_none() && after.is_none()
    }

    /// Number of letters the placement would reuse from words already on the board.
    pub fn score(&self, word: &[char], row: isize, col: isize, orientation: Orientation) -> usize {
        let (dr, dc) = orientation.step();
        (0..word.len() as isize)
            .filter(|&i| self.at(row + dr * i, col + dc * i).is_some())
            .count()
    }

    /// Writes the word onto the board. Callers must check `can_place` first.
    pub fn commit(&mut self, word: &[char], row: usize, col: usize, orientation: Orientation) -> PlacedWord {
        for (i, &letter) in word.iter().enumerate() {
            let (r, c) = match orientation {
                Orientation::Across => (row, col + i),
                Orientation::Down => (row + i, col),
            };
            self.cells[r][c] = Some(letter);
        }

        PlacedWord {
            word: word.iter().collect(),
            orientation,
            start_row: row,
            start_col: col,
            number: 0,
        }
    }
}

/// Wire format: rows of one-letter strings, `""` for empty cells.
impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.cells.len()))?;
        for row in &self.cells {
            let row: Vec<String> = row
                .iter()
                .map(|cell| cell.map(String::from).unwrap_or_default())
                .collect();
            seq.serialize_element(&row)?;
        }
        seq.end()
    }
}

/// Answer-key rendering, `.` for empty cells.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|cell| cell.unwrap_or('.')).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
