//! Randomized attempts, run in parallel until one of them produces a puzzle.

use std::{
    sync::atomic::{AtomicBool, AtomicUsize, Ordering},
    time::Instant,
};

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info, warn};

use crate::{
    config::{NeighborOrder, PuzzleConfig, Selection, SpangramPlacement, Word},
    error::AttemptFailure,
    grid::{Grid, COMPASS},
    puzzle::{solve, Solution},
    search::{PathSearch, StopSignal},
    Error,
};

/// Generates a puzzle for the given configuration.
///
/// The configuration is validated first, so configuration errors are reported before any search runs. Then up to
/// `config.attempts` attempts are run in parallel, each with its own grid, its own word order, and its own random
/// number generator seeded from `config.seed` (or a random seed) plus the attempt number. Depending on
/// `config.selection`, either the first attempt to finish successfully wins and the others are cancelled, or the
/// lowest-numbered successful attempt wins, which makes the result reproducible for a fixed seed. In that mode a
/// success cancels only the attempts numbered above it.
///
/// When every attempt fails, [`Error::Exhausted`] is returned. This is a normal outcome for hard word sets; raising
/// the number of attempts or picking a different neighbor order may help.
pub fn generate(config: &PuzzleConfig) -> Result<Solution, Error> {
    config.validate()?;

    let base_seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let words = config.word_set();
    let cancel = AtomicBool::new(false);
    let best = AtomicUsize::new(usize::MAX);
    let start = Instant::now();

    info!(
        rows = config.num_rows,
        columns = config.num_columns,
        words = words.len(),
        attempts = config.attempts,
        seed = base_seed,
        variant = ?config.variant,
        "generating puzzle"
    );

    let run = |index: usize, stop: StopSignal<'_>| {
        let seed = base_seed.wrapping_add(index as u64);

        match attempt(config, &words, seed, Some(stop)) {
            Ok(solution) => Some((index, solution)),
            Err(failure) => {
                debug!(attempt = index, %failure, "attempt failed");
                None
            }
        }
    };

    let winner = match config.selection {
        Selection::FirstCompleted => (0..config.attempts).into_par_iter().find_map_any(|index| {
            let found = run(index, StopSignal::Flag(&cancel));
            if found.is_some() {
                cancel.store(true, Ordering::Relaxed);
            }
            found
        }),
        Selection::LowestAttempt => {
            (0..config.attempts).into_par_iter().find_map_first(|index| {
                let found = run(index, StopSignal::Outranked { best: &best, index });
                if found.is_some() {
                    best.fetch_min(index, Ordering::Relaxed);
                }
                found
            })
        }
    };

    match winner {
        Some((index, solution)) => {
            info!(attempt = index, elapsed = ?start.elapsed(), "puzzle generated");
            Ok(solution)
        }
        None => {
            warn!(attempts = config.attempts, elapsed = ?start.elapsed(), "no solution found");
            Err(Error::Exhausted {
                attempts: config.attempts,
            })
        }
    }
}

/// Runs a single attempt with a generator seeded from `seed`: draws a word order, then places the words in that
/// order onto a fresh grid.
///
/// `words` is expected to come from [`PuzzleConfig::word_set`]. The configuration is not validated here.
pub fn attempt(
    config: &PuzzleConfig,
    words: &[Word],
    seed: u64,
    stop: Option<StopSignal<'_>>,
) -> Result<Solution, AttemptFailure> {
    let mut rng = StdRng::seed_from_u64(seed);
    let order = word_order(words, config.placement(), &mut rng);

    let mut search = PathSearch::new(config.variant.max_diagonals());
    search = match config.neighbor_order {
        NeighborOrder::Shuffled => search,
        NeighborOrder::PerAttempt => search.with_random_offsets(&mut rng),
        NeighborOrder::Compass => search.with_offsets(COMPASS),
    };
    if let Some(stop) = stop {
        search = search.with_stop_signal(stop);
    }

    solve(
        Grid::new(config.num_rows, config.num_columns),
        &order,
        config.variant,
        &search,
        &mut rng,
    )
}

/// Shuffles `words` into the order one attempt will place them in, putting the spangram where `placement` says.
pub fn word_order<R: Rng + ?Sized>(
    words: &[Word],
    placement: SpangramPlacement,
    rng: &mut R,
) -> Vec<Word> {
    let mut order: Vec<Word> = words.iter().filter(|w| !w.is_spangram).cloned().collect();
    let spangram = words.iter().find(|w| w.is_spangram).cloned();

    order.shuffle(rng);

    if let Some(spangram) = spangram {
        match placement {
            SpangramPlacement::Midpoint => order.insert(order.len() / 2, spangram),
            SpangramPlacement::Random => {
                let index = rng.gen_range(0..=order.len());
                order.insert(index, spangram);
            }
            SpangramPlacement::Shuffled => {
                order.push(spangram);
                order.shuffle(rng);
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Variant;

    fn grains() -> Vec<Word> {
        PuzzleConfig::default().word_set()
    }

    #[test]
    fn midpoint_puts_the_spangram_in_the_middle() {
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..20 {
            let order = word_order(&grains(), SpangramPlacement::Midpoint, &mut rng);

            assert_eq!(order.len(), 7);
            assert!(order[3].is_spangram);
            assert_eq!(order.iter().filter(|w| w.is_spangram).count(), 1);
        }
    }

    #[test]
    fn every_placement_keeps_every_word() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut expected: Vec<String> = grains().into_iter().map(|w| w.text).collect();
        expected.sort();

        for placement in [
            SpangramPlacement::Midpoint,
            SpangramPlacement::Shuffled,
            SpangramPlacement::Random,
        ] {
            let mut got: Vec<String> = word_order(&grains(), placement, &mut rng)
                .into_iter()
                .map(|w| w.text)
                .collect();
            got.sort();

            assert_eq!(got, expected);
        }
    }

    #[test]
    fn shuffled_placement_moves_the_spangram_around() {
        let mut rng = StdRng::seed_from_u64(2);
        let positions: std::collections::HashSet<usize> = (0..200)
            .filter_map(|_| {
                word_order(&grains(), SpangramPlacement::Shuffled, &mut rng)
                    .iter()
                    .position(|w| w.is_spangram)
            })
            .collect();

        assert!(positions.len() > 1);
    }

    #[test]
    fn generates_two_by_two() {
        let mut config = PuzzleConfig::new(2, 2, ["ON"], "GO");
        config.variant = Variant::Golden;
        config.attempts = 4;

        let solution = generate(&config).unwrap();

        assert!(solution.grid().is_full());
        assert_eq!(solution.word_paths().len(), 2);
    }

    #[test]
    fn strict_two_by_two_is_exhausted() {
        // The regular word has to take a diagonal, which touches the top and bottom rows.
        let mut config = PuzzleConfig::new(2, 2, ["ON"], "GO");
        config.attempts = 16;

        assert_eq!(generate(&config), Err(Error::Exhausted { attempts: 16 }));
    }

    #[test]
    fn configuration_errors_come_first() {
        let mut config = PuzzleConfig::new(2, 2, ["ONE"], "GO");
        config.attempts = 0;

        assert_eq!(
            generate(&config),
            Err(Error::LetterCountMismatch {
                letters: 5,
                cells: 4
            })
        );
    }

    #[test]
    fn zero_attempts_is_exhaustion() {
        let mut config = PuzzleConfig::new(2, 2, ["ON"], "GO");
        config.attempts = 0;

        assert_eq!(generate(&config), Err(Error::Exhausted { attempts: 0 }));
    }

    #[test]
    fn cancelled_attempts_give_up() {
        let config = PuzzleConfig::default();
        let cancel = AtomicBool::new(true);

        assert_eq!(
            attempt(&config, &config.word_set(), 0, Some(StopSignal::Flag(&cancel))),
            Err(AttemptFailure::Cancelled)
        );
    }

    #[test]
    fn outranked_attempts_give_up_and_lower_ones_run() {
        let config = PuzzleConfig::default();
        let words = config.word_set();
        let best = AtomicUsize::new(3);

        let outranked = StopSignal::Outranked {
            best: &best,
            index: 4,
        };
        assert_eq!(
            attempt(&config, &words, 4, Some(outranked)),
            Err(AttemptFailure::Cancelled)
        );

        for index in 0..3 {
            let ahead = StopSignal::Outranked { best: &best, index };
            assert_eq!(
                attempt(&config, &words, index as u64, Some(ahead)),
                attempt(&config, &words, index as u64, None)
            );
        }
    }

    #[test]
    fn lowest_attempt_matches_a_sequential_scan() {
        let mut config = PuzzleConfig::new(3, 3, ["WXYZ"], "ABCDE");
        config.spangram_placement = Some(SpangramPlacement::Shuffled);
        config.selection = Selection::LowestAttempt;
        config.attempts = 500;
        config.seed = Some(11);

        let words = config.word_set();
        let expected = (0..config.attempts)
            .find_map(|index| attempt(&config, &words, 11 + index as u64, None).ok());

        assert_eq!(generate(&config).ok(), expected);
    }

    #[test]
    fn attempts_are_reproducible() {
        let config = PuzzleConfig::default();
        let words = config.word_set();

        for seed in 0..5 {
            assert_eq!(
                attempt(&config, &words, seed, None),
                attempt(&config, &words, seed, None)
            );
        }
    }
}
