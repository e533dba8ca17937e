//! Depth-first placement of a single word onto a partially filled grid.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use array2d::Array2D;
use rand::{seq::SliceRandom, Rng};

use crate::{
    geometry::{is_diagonal_step, is_straight_line, Coord},
    grid::{Grid, COMPASS},
};

/// One level of the depth-first search: the cell it stands on, the neighbors still to try from there, and how many
/// diagonal steps the path has used to reach it.
struct Frame {
    cell: Coord,
    neighbors: Vec<Coord>,
    next: usize,
    diagonals: usize,
}

/// Tells a running search to give up.
#[derive(Clone, Copy, Debug)]
pub enum StopSignal<'a> {
    /// Stop once the flag is set.
    Flag(&'a AtomicBool),

    /// Stop once `best` holds an attempt number lower than `index`.
    Outranked {
        /// The lowest successful attempt number so far, `usize::MAX` while there is none.
        best: &'a AtomicUsize,
        /// The attempt number of this search.
        index: usize,
    },
}

impl StopSignal<'_> {
    /// Whether the search should stop now.
    pub fn is_raised(&self) -> bool {
        match self {
            StopSignal::Flag(flag) => flag.load(Ordering::Relaxed),
            StopSignal::Outranked { best, index } => best.load(Ordering::Relaxed) < *index,
        }
    }
}

/// Finds paths of empty cells for words, one word at a time.
///
/// The search tries every vacant starting cell in random order and walks the 8-neighborhood depth first, never
/// revisiting a cell within the path. A full-length path that lies in a single row or column is rejected and the
/// search backtracks past it as if the branch had failed.
#[derive(Clone, Debug, Default)]
pub struct PathSearch<'a> {
    max_diagonals: Option<usize>,
    offsets: Option<[(isize, isize); 8]>,
    stop: Option<StopSignal<'a>>,
}

impl<'a> PathSearch<'a> {
    /// A search allowing at most `max_diagonals` diagonal steps per path, or any number if [`None`]. Neighbors
    /// are reshuffled every time a cell is expanded.
    pub fn new(max_diagonals: Option<usize>) -> Self {
        Self {
            max_diagonals,
            offsets: None,
            stop: None,
        }
    }

    /// Expands neighbors in the fixed order of `offsets` instead of shuffling them.
    pub fn with_offsets(mut self, offsets: [(isize, isize); 8]) -> Self {
        self.offsets = Some(offsets);
        self
    }

    /// Expands neighbors in a random permutation of the compass, drawn once now and kept for every word.
    pub fn with_random_offsets<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        let mut offsets = COMPASS;
        offsets.shuffle(rng);
        self.with_offsets(offsets)
    }

    /// Gives up as soon as `cancel` becomes true.
    pub fn with_cancellation(self, cancel: &'a AtomicBool) -> Self {
        self.with_stop_signal(StopSignal::Flag(cancel))
    }

    /// Gives up as soon as `stop` is raised.
    pub fn with_stop_signal(mut self, stop: StopSignal<'a>) -> Self {
        self.stop = Some(stop);
        self
    }

    /// Whether the search has been told to stop.
    pub fn is_cancelled(&self) -> bool {
        self.stop.is_some_and(|stop| stop.is_raised())
    }

    fn neighbors<R: Rng + ?Sized>(&self, grid: &Grid, cell: Coord, rng: &mut R) -> Vec<Coord> {
        match &self.offsets {
            Some(offsets) => grid.neighbors_in(cell, offsets),
            None => grid.neighbors(cell, rng),
        }
    }

    /// Looks for a path of vacant cells long enough to spell `word`.
    ///
    /// On success the word's first letter is left in the starting cell and the path is returned; writing the
    /// remaining letters is up to the caller. On failure the grid is left exactly as it was.
    pub fn place_word<R: Rng + ?Sized>(
        &self,
        grid: &mut Grid,
        word: &str,
        rng: &mut R,
    ) -> Option<Vec<Coord>> {
        let first = word.chars().next()?;
        let len = word.chars().count();

        let mut starts = grid.coords();
        starts.shuffle(rng);

        let mut visited = Array2D::filled_with(false, grid.num_rows(), grid.num_columns());

        for start in starts {
            if self.is_cancelled() {
                return None;
            }
            if !grid.is_vacant(start) {
                continue;
            }

            grid.set(start, first);

            if let Some(path) = self.search_from(grid, start, len, &mut visited, rng) {
                return Some(path);
            }

            grid.clear(start);
        }

        None
    }

    fn search_from<R: Rng + ?Sized>(
        &self,
        grid: &Grid,
        start: Coord,
        len: usize,
        visited: &mut Array2D<bool>,
        rng: &mut R,
    ) -> Option<Vec<Coord>> {
        let mut path = vec![start];

        if len == 1 {
            return (!is_straight_line(&path)).then_some(path);
        }

        visited[start] = true;
        let mut stack = vec![Frame {
            cell: start,
            neighbors: self.neighbors(grid, start, rng),
            next: 0,
            diagonals: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            if self.is_cancelled() {
                break;
            }

            let Some(&next) = frame.neighbors.get(frame.next) else {
                // exhausted, backtrack
                stack.pop();
                if let Some(cell) = path.pop() {
                    visited[cell] = false;
                }
                continue;
            };
            frame.next += 1;

            if visited[next] || !grid.is_vacant(next) {
                continue;
            }

            let diagonals = frame.diagonals + usize::from(is_diagonal_step(frame.cell, next));
            if self.max_diagonals.is_some_and(|max| diagonals > max) {
                continue;
            }

            path.push(next);

            if path.len() == len {
                if !is_straight_line(&path) {
                    for &cell in &path {
                        visited[cell] = false;
                    }
                    return Some(path);
                }

                path.pop();
                continue;
            }

            visited[next] = true;
            let neighbors = self.neighbors(grid, next, rng);
            stack.push(Frame {
                cell: next,
                neighbors,
                next: 0,
                diagonals,
            });
        }

        for &cell in &path {
            visited[cell] = false;
        }

        None
    }
}
