use thiserror::Error;

/// An error that happened when generating a puzzle.
///
/// Everything except [`Error::Exhausted`] is a configuration error: it is reported before any attempt is
/// scheduled and retrying will not help. Exhaustion is a normal outcome of the randomized search, and the caller
/// may raise the attempt budget and try again.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The grid has no rows or no columns.
    #[error("Grid dimensions {num_rows} rows x {num_columns} columns must both be non-zero")]
    ZeroDimension {
        /// The configured number of rows.
        num_rows: usize,
        /// The configured number of columns.
        num_columns: usize,
    },

    /// A word or the spangram contains no letters.
    #[error("Words and the spangram must contain at least one letter")]
    EmptyWord,

    /// The same word was given twice, or the spangram was also listed among the regular words.
    #[error("Word {0:?} appears more than once")]
    DuplicateWord(String),

    /// The words and spangram together do not contain exactly one letter per grid cell.
    #[error("Total letters must equal {cells}, but the words and spangram contain {letters}")]
    LetterCountMismatch {
        /// Sum of all word lengths, spangram included.
        letters: usize,
        /// Number of cells in the grid.
        cells: usize,
    },

    /// Every attempt in the budget failed to produce a puzzle.
    #[error("No solution found after {attempts} attempts")]
    Exhausted {
        /// The number of attempts that were tried.
        attempts: usize,
    },
}

impl Error {
    /// Returns whether this is a configuration error, as opposed to search exhaustion.
    pub fn is_configuration(&self) -> bool {
        !matches!(self, Error::Exhausted { .. })
    }
}

/// Why a single attempt was abandoned. These are expected outcomes of the search, never surfaced to callers of
/// [`generate`](crate::generate); they exist so failed attempts can be logged with a reason.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AttemptFailure {
    /// No starting cell produced an acceptable path for the word.
    #[error("no path for {word:?}")]
    Unplaceable {
        /// The word that could not be placed.
        word: String,
    },

    /// The word was placed, but its path broke the edge rule for its class.
    #[error("path for {word:?} breaks its edge rule")]
    EdgeRule {
        /// The word whose path was rejected.
        word: String,
    },

    /// Every word was placed but some cell is still empty.
    #[error("grid is not full")]
    GridNotFull,

    /// Another attempt already won.
    #[error("cancelled")]
    Cancelled,
}
