use std::collections::HashSet;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::Error;

/// Which set of placement rules to generate with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    /// At most one diagonal step per word, regular words must not touch opposite edges, and the spangram is
    /// placed halfway through the word order.
    #[default]
    Strict,

    /// Unlimited diagonal steps, and only the spangram is checked against the edges.
    Golden,
}

impl Variant {
    /// How many diagonal steps a single path may take, or [`None`] for no limit.
    pub fn max_diagonals(self) -> Option<usize> {
        match self {
            Variant::Strict => Some(1),
            Variant::Golden => None,
        }
    }

    /// Whether regular words are forbidden from touching two opposite edges.
    pub fn restricts_regular_words(self) -> bool {
        matches!(self, Variant::Strict)
    }

    /// Where the spangram goes in the word order unless configured otherwise.
    pub fn default_placement(self) -> SpangramPlacement {
        match self {
            Variant::Strict => SpangramPlacement::Midpoint,
            Variant::Golden => SpangramPlacement::Shuffled,
        }
    }
}

/// Where the spangram is put in each attempt's word order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SpangramPlacement {
    /// Shuffle the regular words and insert the spangram at index `len / 2`, so it is placed once roughly half
    /// the grid is occupied.
    Midpoint,

    /// Shuffle the spangram together with every other word.
    Shuffled,

    /// Shuffle the regular words and insert the spangram at a uniformly random index.
    Random,
}

/// The order in which the search expands the neighbors of a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NeighborOrder {
    /// Reshuffle the eight neighbors every time a cell is expanded.
    #[default]
    Shuffled,

    /// Draw one random order of the eight directions per attempt and keep it for every cell.
    PerAttempt,

    /// Always use compass order, starting from the upper left. Produces compact paths that tile dense grids far
    /// more often than shuffled orders.
    Compass,
}

/// Which successful attempt wins when several succeed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Selection {
    /// Whichever attempt finishes first. Attempts still running are told to stop.
    #[default]
    FirstCompleted,

    /// The lowest-numbered successful attempt, which makes the result reproducible for a fixed seed.
    LowestAttempt,
}

/// A word to be placed, and whether it is the spangram.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Word {
    /// The letters of the word.
    pub text: String,

    /// Whether this is the spangram.
    pub is_spangram: bool,
}

impl Word {
    /// A regular word.
    pub fn regular(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_spangram: false,
        }
    }

    /// The spangram.
    pub fn spangram(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_spangram: true,
        }
    }

    /// The number of letters in the word.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the word has no letters.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// The configuration for a puzzle. See [`generate`](crate::generate) for details.
///
/// Missing fields in a serialized configuration fall back to [`PuzzleConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// A label for the puzzle, carried through to the output.
    pub theme: String,

    /// The number of rows.
    pub num_rows: usize,

    /// The number of columns.
    pub num_columns: usize,

    /// The regular words, in the order they are listed in the output.
    pub words: Vec<String>,

    /// The word that has to span the grid from one edge to the opposite edge.
    pub spangram: String,

    /// Which placement rules apply.
    pub variant: Variant,

    /// How many randomized attempts to make before giving up.
    pub attempts: usize,

    /// Seed for the attempts' random number generators. A random seed is drawn when this is [`None`].
    pub seed: Option<u64>,

    /// Where the spangram goes in each word order, or [`None`] for the variant's default.
    pub spangram_placement: Option<SpangramPlacement>,

    /// The order in which neighbors are explored.
    pub neighbor_order: NeighborOrder,

    /// Which successful attempt wins.
    pub selection: Selection,
}

impl PuzzleConfig {
    /// A strict-variant configuration with 500 attempts, freshly shuffled neighbors, and a random seed.
    ///
    /// These defaults suit small grids. Dense grids of around fifty cells need far more: under the strict rules
    /// roughly one attempt in four thousand succeeds with shuffled neighbors and one in nine hundred with
    /// [`NeighborOrder::Compass`], so budget tens of thousands of attempts, or switch to the compass order,
    /// before treating exhaustion as a sign of an unsolvable word set.
    pub fn new(
        num_rows: usize,
        num_columns: usize,
        words: impl IntoIterator<Item = impl Into<String>>,
        spangram: impl Into<String>,
    ) -> Self {
        Self {
            theme: String::new(),
            num_rows,
            num_columns,
            words: words.into_iter().map(Into::into).collect(),
            spangram: spangram.into(),
            variant: Variant::default(),
            attempts: 500,
            seed: None,
            spangram_placement: None,
            neighbor_order: NeighborOrder::default(),
            selection: Selection::default(),
        }
    }

    /// The number of cells in the grid.
    pub fn cells(&self) -> usize {
        self.num_rows * self.num_columns
    }

    /// The number of letters over all words, spangram included.
    pub fn total_letters(&self) -> usize {
        self.word_set().iter().map(Word::len).sum()
    }

    /// Every word, spangram first.
    pub fn all_words(&self) -> Vec<String> {
        std::iter::once(self.spangram.clone())
            .chain(self.words.iter().cloned())
            .collect()
    }

    /// The word set to place, spangram first.
    pub fn word_set(&self) -> Vec<Word> {
        std::iter::once(Word::spangram(self.spangram.clone()))
            .chain(self.words.iter().cloned().map(Word::regular))
            .collect()
    }

    /// The spangram placement policy in effect.
    pub fn placement(&self) -> SpangramPlacement {
        self.spangram_placement
            .unwrap_or_else(|| self.variant.default_placement())
    }

    /// Trims surrounding whitespace from every word and upper-cases it, so words typed on a command line and words
    /// read from a file end up spelled the same way.
    pub fn normalize_words(&mut self) {
        let normalize = |word: &str| word.trim().to_uppercase();

        self.spangram = normalize(&self.spangram);
        for word in &mut self.words {
            *word = normalize(word);
        }
    }

    /// Checks the configuration before any search starts.
    pub fn validate(&self) -> Result<(), Error> {
        if self.num_rows == 0 || self.num_columns == 0 {
            return Err(Error::ZeroDimension {
                num_rows: self.num_rows,
                num_columns: self.num_columns,
            });
        }

        let mut seen = HashSet::new();
        for word in self.word_set() {
            if word.is_empty() {
                return Err(Error::EmptyWord);
            }
            if !seen.insert(word.text.clone()) {
                return Err(Error::DuplicateWord(word.text));
            }
        }

        let letters = self.total_letters();
        let cells = self.cells();
        if letters != cells {
            return Err(Error::LetterCountMismatch { letters, cells });
        }

        Ok(())
    }
}

impl Default for PuzzleConfig {
    /// Six gluten-free grains and a spangram on an 8 x 6 grid, generated with the golden rules.
    fn default() -> Self {
        Self {
            theme: String::from("Gluten free"),
            variant: Variant::Golden,
            neighbor_order: NeighborOrder::Compass,
            ..Self::new(
                8,
                6,
                ["ALMOND", "CORN", "CHICKPEA", "TAPIOCA", "BUCKWHEAT", "RICE"],
                "GLUTENFREE",
            )
        }
    }
}
