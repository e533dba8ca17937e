#![warn(missing_docs)]

//! # Strands puzzles
//!
//! A crate that generates strands-style word puzzles: a grid in which every cell holds exactly one letter, every
//! word snakes through adjacent cells (diagonals included), and one word, the spangram, stretches from one edge of
//! the grid to the opposite edge.
//!
//! Generation is a randomized search. Each attempt shuffles the words into an order and places them one by one
//! with a backtracking depth-first search; many attempts run in parallel and the first one that fills the grid
//! wins.
//!
//! ```no_run
//! use strands::{generate, GameData, PuzzleConfig};
//!
//! let config = PuzzleConfig::default();
//! let solution = generate(&config)?;
//!
//! println!("{}", solution);
//! println!("{}", GameData::from_solution(&config, &solution).to_json()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod game_data;
pub mod generator;
pub mod geometry;
pub mod grid;
pub mod puzzle;
pub mod search;

pub use config::{NeighborOrder, PuzzleConfig, Selection, SpangramPlacement, Variant, Word};
pub use error::{AttemptFailure, Error};
pub use game_data::GameData;
pub use generator::generate;
pub use geometry::Coord;
pub use grid::Grid;
pub use puzzle::Solution;
