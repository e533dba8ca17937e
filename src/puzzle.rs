use std::{fmt::Display, ops::Index};

use rand::Rng;
use tracing::trace;

use crate::{
    config::{Variant, Word},
    error::AttemptFailure,
    geometry::{is_regular_word_valid, is_spangram_valid, Coord},
    grid::Grid,
    search::PathSearch,
};

/// A completely filled grid together with the path every word takes through it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    grid: Grid,
    word_paths: Vec<(Word, Vec<Coord>)>,
}

impl Solution {
    /// The filled grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The number of rows in the grid.
    pub fn num_rows(&self) -> usize {
        self.grid.num_rows()
    }

    /// The number of columns in the grid.
    pub fn num_columns(&self) -> usize {
        self.grid.num_columns()
    }

    /// Every word with its path, in the order the words were placed.
    pub fn word_paths(&self) -> &[(Word, Vec<Coord>)] {
        &self.word_paths
    }

    /// The path spelling `word`, if it is part of the puzzle.
    pub fn path(&self, word: &str) -> Option<&[Coord]> {
        self.word_paths
            .iter()
            .find(|(w, _)| w.text == word)
            .map(|(_, path)| path.as_slice())
    }

    /// The spangram and its path.
    pub fn spangram(&self) -> Option<(&Word, &[Coord])> {
        self.word_paths
            .iter()
            .find(|(w, _)| w.is_spangram)
            .map(|(w, path)| (w, path.as_slice()))
    }

    /// The letters of the grid, row by row.
    pub fn letter_rows(&self) -> Vec<Vec<char>> {
        // A solution is only built from a full grid.
        self.grid.letter_rows().unwrap_or_default()
    }
}

impl Index<Coord> for Solution {
    type Output = Option<char>;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.grid[index]
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut words_iter = self.word_paths.iter().map(|(word, _)| word);

        for row in self.grid.to_string().lines() {
            match words_iter.next() {
                Some(word) if word.is_spangram => writeln!(f, "{} | {} *", row, word.text)?,
                Some(word) => writeln!(f, "{} | {}", row, word.text)?,
                None => writeln!(f, "{} |", row)?,
            }
        }

        for word in words_iter {
            let marker = if word.is_spangram { " *" } else { "" };
            let width = self.num_columns() * 2 - 1;
            writeln!(f, "{:width$} | {}{}", "", word.text, marker, width = width)?;
        }

        Ok(())
    }
}

/// Places every word of `order` onto `grid`, in that order, and returns the result if it is a valid puzzle.
///
/// Each placed path is checked against its word's edge rule: the spangram has to touch two opposite edges, and
/// under [`Variant::Strict`] regular words must not. Any placement or rule failure abandons the whole attempt;
/// only the cell sequence within a single word is ever backtracked.
pub fn solve<R: Rng + ?Sized>(
    mut grid: Grid,
    order: &[Word],
    variant: Variant,
    search: &PathSearch<'_>,
    rng: &mut R,
) -> Result<Solution, AttemptFailure> {
    let (num_rows, num_columns) = (grid.num_rows(), grid.num_columns());
    let mut word_paths = Vec::with_capacity(order.len());

    for word in order {
        let Some(path) = search.place_word(&mut grid, &word.text, rng) else {
            if search.is_cancelled() {
                return Err(AttemptFailure::Cancelled);
            }

            return Err(AttemptFailure::Unplaceable {
                word: word.text.clone(),
            });
        };

        let follows_edge_rule = if word.is_spangram {
            is_spangram_valid(&path, num_rows, num_columns)
        } else {
            !variant.restricts_regular_words()
                || is_regular_word_valid(&path, num_rows, num_columns)
        };

        if !follows_edge_rule {
            return Err(AttemptFailure::EdgeRule {
                word: word.text.clone(),
            });
        }

        for (letter, &coord) in word.text.chars().zip(&path) {
            grid.set(coord, letter);
        }

        trace!(word = %word.text, ?path, "placed word");
        word_paths.push((word.clone(), path));
    }

    if !grid.is_full() {
        return Err(AttemptFailure::GridNotFull);
    }

    for (word, path) in &word_paths {
        if word.is_spangram && !is_spangram_valid(path, num_rows, num_columns) {
            return Err(AttemptFailure::EdgeRule {
                word: word.text.clone(),
            });
        }
    }

    Ok(Solution { grid, word_paths })
}
