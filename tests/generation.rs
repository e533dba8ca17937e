mod common;

use common::assert_valid_solution;
use strands::{
    generate, Error, GameData, NeighborOrder, PuzzleConfig, Selection, SpangramPlacement, Variant,
};

fn grains(num_rows: usize, num_columns: usize) -> PuzzleConfig {
    PuzzleConfig::new(
        num_rows,
        num_columns,
        ["ALMOND", "CORN", "CHICKPEA", "TAPIOCA", "BUCKWHEAT", "RICE"],
        "GLUTENFREE",
    )
}

#[test]
fn golden_grains() {
    let config = PuzzleConfig {
        attempts: 1000,
        seed: Some(2024),
        selection: Selection::LowestAttempt,
        ..PuzzleConfig::default()
    };

    let solution = generate(&config).unwrap();

    assert_valid_solution(&config, &solution);
}

#[test]
fn strict_grains() {
    let mut config = grains(6, 8);
    config.neighbor_order = NeighborOrder::Compass;
    config.attempts = 20_000;
    config.seed = Some(99);

    let solution = generate(&config).unwrap();

    assert_valid_solution(&config, &solution);
    let (_, spangram_path) = solution.spangram().unwrap();
    let rows: Vec<usize> = spangram_path.iter().map(|&(r, _)| r).collect();
    let columns: Vec<usize> = spangram_path.iter().map(|&(_, c)| c).collect();
    let spans_rows = rows.contains(&0) && rows.contains(&5);
    let spans_columns = columns.contains(&0) && columns.contains(&7);
    assert!(spans_rows || spans_columns);
}

#[test]
fn strict_small_grid_with_shuffled_neighbors() {
    let mut config = PuzzleConfig::new(3, 3, ["WXYZ"], "ABCDE");
    config.spangram_placement = Some(SpangramPlacement::Shuffled);
    config.attempts = 500;

    let solution = generate(&config).unwrap();

    assert_valid_solution(&config, &solution);
}

#[test]
fn fixed_seed_is_deterministic() {
    let config = PuzzleConfig {
        attempts: 1000,
        seed: Some(7),
        selection: Selection::LowestAttempt,
        ..PuzzleConfig::default()
    };

    let first = generate(&config).unwrap();
    let second = generate(&config).unwrap();

    assert_eq!(first, second);
    assert_eq!(
        GameData::from_solution(&config, &first),
        GameData::from_solution(&config, &second)
    );
}

#[test]
fn random_seeds_keep_succeeding() {
    let config = PuzzleConfig {
        attempts: 1000,
        ..PuzzleConfig::default()
    };

    for _ in 0..3 {
        let solution = generate(&config).unwrap();
        assert_valid_solution(&config, &solution);
    }
}

#[test]
fn every_neighbor_order_solves_a_small_grid() {
    for neighbor_order in [
        NeighborOrder::Shuffled,
        NeighborOrder::PerAttempt,
        NeighborOrder::Compass,
    ] {
        let mut config = PuzzleConfig::new(3, 4, ["CABS"], "PLANKTON");
        config.variant = Variant::Golden;
        config.neighbor_order = neighbor_order;
        config.attempts = 2000;

        let solution = generate(&config).unwrap();
        assert_valid_solution(&config, &solution);
    }
}

#[test]
fn mismatched_letters_fail_before_searching() {
    let config = grains(6, 8);
    let short = PuzzleConfig {
        words: vec![
            String::from("ALMOND"),
            String::from("CORN"),
            String::from("CHICKPEA"),
            String::from("TAPIOCA"),
            String::from("BUCKWHEAT"),
            String::from("RIC"),
        ],
        ..config
    };

    let err = generate(&short).unwrap_err();

    assert_eq!(
        err,
        Error::LetterCountMismatch {
            letters: 47,
            cells: 48
        }
    );
    assert!(err.is_configuration());
}

#[test]
fn single_row_grids_are_exhausted() {
    for variant in [Variant::Strict, Variant::Golden] {
        let mut config = PuzzleConfig::new(1, 8, ["ABCD"], "EFGH");
        config.variant = variant;
        config.attempts = 50;

        let err = generate(&config).unwrap_err();

        assert_eq!(err, Error::Exhausted { attempts: 50 });
        assert!(!err.is_configuration());
    }
}
