use std::{fmt::Display, ops::Index};

use array2d::Array2D;
use rand::{seq::SliceRandom, Rng};

use crate::geometry::Coord;

/// The eight row/column offsets around a cell, in compass order starting from the upper left.
pub const COMPASS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed-size grid of letters in which every cell is either empty or holds one letter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Option<char>>,
}

impl Grid {
    /// Creates a grid with every cell empty.
    pub fn new(num_rows: usize, num_columns: usize) -> Self {
        Self {
            cells: Array2D::filled_with(None, num_rows, num_columns),
        }
    }

    /// The number of rows in the grid.
    pub fn num_rows(&self) -> usize {
        self.cells.num_rows()
    }

    /// The number of columns in the grid.
    pub fn num_columns(&self) -> usize {
        self.cells.num_columns()
    }

    /// Gets the letter at `coord`, or [`None`] if the cell is empty.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds.
    pub fn get(&self, coord: Coord) -> Option<char> {
        self.cells[coord]
    }

    /// Puts `letter` in the cell at `coord`, replacing whatever was there.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is out of bounds.
    pub fn set(&mut self, coord: Coord, letter: char) {
        self.cells[coord] = Some(letter);
    }

    /// Empties the cell at `coord`.
    pub fn clear(&mut self, coord: Coord) {
        self.cells[coord] = None;
    }

    /// Returns whether the cell at `coord` holds no letter.
    pub fn is_vacant(&self, coord: Coord) -> bool {
        self.cells[coord].is_none()
    }

    /// Returns whether every cell holds a letter.
    pub fn is_full(&self) -> bool {
        self.cells.elements_row_major_iter().all(Option::is_some)
    }

    /// All coordinates of the grid in row-major order.
    pub fn coords(&self) -> Vec<Coord> {
        let num_columns = self.num_columns();

        (0..self.num_rows())
            .flat_map(|row| (0..num_columns).map(move |column| (row, column)))
            .collect()
    }

    /// The in-bounds cells around `coord`, visited in the order of `offsets`.
    pub fn neighbors_in(&self, coord: Coord, offsets: &[(isize, isize)]) -> Vec<Coord> {
        offsets
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = coord.0.checked_add_signed(dr)?;
                let column = coord.1.checked_add_signed(dc)?;

                (row < self.num_rows() && column < self.num_columns()).then_some((row, column))
            })
            .collect()
    }

    /// The up to eight in-bounds cells around `coord`, in a freshly shuffled order.
    pub fn neighbors<R: Rng + ?Sized>(&self, coord: Coord, rng: &mut R) -> Vec<Coord> {
        let mut neighbors = self.neighbors_in(coord, &COMPASS);
        neighbors.shuffle(rng);
        neighbors
    }

    /// The letters of the grid row by row, or [`None`] if any cell is still empty.
    pub fn letter_rows(&self) -> Option<Vec<Vec<char>>> {
        self.cells
            .rows_iter()
            .map(|row| row.copied().collect::<Option<Vec<char>>>())
            .collect()
    }
}

impl Index<Coord> for Grid {
    type Output = Option<char>;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[index]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows_iter() {
            let line: Vec<String> = row
                .map(|cell| cell.map_or_else(|| String::from("."), String::from))
                .collect();

            writeln!(f, "{}", line.join(" "))?;
        }

        Ok(())
    }
}
