use std::collections::HashSet;

use strands::{
    geometry::{diagonal_steps, is_adjacent, is_straight_line, touches_opposite_edges},
    PuzzleConfig, Solution, Variant,
};

/// Checks every property a generated puzzle must have.
pub fn assert_valid_solution(config: &PuzzleConfig, solution: &Solution) {
    let (rows, columns) = (config.num_rows, config.num_columns);
    assert_eq!(solution.num_rows(), rows);
    assert_eq!(solution.num_columns(), columns);
    assert!(solution.grid().is_full());

    let mut expected: Vec<String> = config.all_words();
    let mut placed: Vec<String> = solution
        .word_paths()
        .iter()
        .map(|(word, _)| word.text.clone())
        .collect();
    expected.sort();
    placed.sort();
    assert_eq!(placed, expected);

    let mut covered = HashSet::new();
    for (word, path) in solution.word_paths() {
        assert_eq!(path.len(), word.len(), "{}", word.text);

        for (letter, &coord) in word.text.chars().zip(path) {
            assert_eq!(solution[coord], Some(letter), "{} at {:?}", word.text, coord);
            assert!(covered.insert(coord), "{:?} used twice", coord);
        }
        for pair in path.windows(2) {
            assert!(is_adjacent(pair[0], pair[1]), "{}: {:?}", word.text, pair);
        }

        assert!(!is_straight_line(path), "{} is straight", word.text);

        let spans = touches_opposite_edges(path, rows, columns);
        if word.is_spangram {
            assert!(spans, "spangram {} does not span", word.text);
            assert_eq!(word.text, config.spangram);
        } else if config.variant == Variant::Strict {
            assert!(!spans, "{} spans the grid", word.text);
        }

        if config.variant == Variant::Strict {
            assert!(diagonal_steps(path) <= 1, "{} bends too often", word.text);
        }
    }

    assert_eq!(covered.len(), rows * columns);
}
