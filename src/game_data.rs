use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{config::PuzzleConfig, puzzle::Solution};

/// The finished puzzle in the shape the game front end loads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameData {
    /// The puzzle's theme label.
    pub theme: String,

    /// The letters of the grid, row-major.
    pub letter_grid: Vec<Vec<char>>,

    /// Every word of the puzzle, spangram first.
    pub valid_words: Vec<String>,

    /// The spangram.
    pub spangram: String,

    /// For each word, the `[row, column]` cells it passes through, in order.
    pub word_paths: BTreeMap<String, Vec<[usize; 2]>>,
}

impl GameData {
    /// Collects the output record for a solution generated from `config`.
    pub fn from_solution(config: &PuzzleConfig, solution: &Solution) -> Self {
        let word_paths = solution
            .word_paths()
            .iter()
            .map(|(word, path)| {
                let cells = path.iter().map(|&(row, column)| [row, column]).collect();
                (word.text.clone(), cells)
            })
            .collect();

        Self {
            theme: config.theme.clone(),
            letter_grid: solution.letter_rows(),
            valid_words: config.all_words(),
            spangram: config.spangram.clone(),
            word_paths,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// A JavaScript statement defining `gameData`, with the top-level keys written as bare identifiers.
    pub fn to_script(&self) -> serde_json::Result<String> {
        let json = self.to_json()?;

        let lines: Vec<String> = json.lines().map(unquote_top_level_key).collect();

        Ok(format!("const gameData = {};", lines.join("\n")))
    }
}

/// `  "key": value` becomes `  key: value`. Only lines indented by exactly two spaces are top-level keys.
fn unquote_top_level_key(line: &str) -> String {
    let Some(rest) = line.strip_prefix("  \"") else {
        return line.to_string();
    };

    match rest.split_once("\":") {
        Some((key, value)) if !key.contains('"') => format!("  {}:{}", key, value),
        _ => line.to_string(),
    }
}
