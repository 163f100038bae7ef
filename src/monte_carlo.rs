//! An agent that picks moves by averaging random playouts

use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rayon::prelude::*;

use crate::{
    board::*,
    rollout::{rollout, RolloutResult},
    WIDTH,
};

/// The number of playouts run per decision unless configured otherwise
pub const DEFAULT_TRIALS: usize = 1000;

/// Accumulated playout scores, indexed by the first column played
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub struct Evaluation {
    pub totals: [i64; WIDTH],
    pub visits: [usize; WIDTH],
}

impl Evaluation {
    pub fn record(&mut self, result: RolloutResult) {
        self.totals[result.anchor] += result.score as i64;
        self.visits[result.anchor] += 1;
    }

    /// Combines two partial evaluations, order doesn't matter
    pub fn merge(mut self, other: Self) -> Self {
        for column in 0..WIDTH {
            self.totals[column] += other.totals[column];
            self.visits[column] += other.visits[column];
        }
        self
    }

    pub fn num_rollouts(&self) -> usize {
        self.visits.iter().sum()
    }

    pub fn mean_score(&self, column: usize) -> Option<f64> {
        match self.visits[column] {
            0 => None,
            visits => Some(self.totals[column] as f64 / visits as f64),
        }
    }

    /// The visited column with the greatest total score
    ///
    /// Ties go to the lowest column. Returns `None` if no column was visited.
    pub fn best_move(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for column in 0..WIDTH {
            if self.visits[column] == 0 {
                continue;
            }
            match best {
                Some(current) if self.totals[current] >= self.totals[column] => {}
                _ => best = Some(column),
            }
        }
        best
    }
}

/// A Monte Carlo agent for Connect 4 positions
///
/// # Notes
/// Every decision runs a fixed number of independent playouts from the
/// position, each on its own copy of the board. A playout's score is credited
/// to the column it started with, and the column with the highest total wins.
/// More trials reduce the variance of the estimate at a linear cost in time.
pub struct MonteCarlo {
    trials: usize,
    rng: StdRng,
    parallel: bool,
    show_progress: bool,
}

impl MonteCarlo {
    /// Creates a new `MonteCarlo` agent seeded from the operating system
    pub fn new() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            rng: StdRng::from_entropy(),
            parallel: false,
            show_progress: false,
        }
    }

    /// Sets the number of playouts per decision
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Makes every decision reproducible from `seed`
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Spreads the playouts over the rayon thread pool
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Draws a progress bar while playouts run
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Runs the configured number of playouts from `board` with `to_move` to play
    ///
    /// The caller's board is never modified.
    pub fn evaluate(&mut self, board: &Board, to_move: Cell) -> Evaluation {
        if to_move.is_empty() {
            warn!("asked to evaluate a position for an empty cell, skipping");
            return Evaluation::default();
        }

        let progress = if self.show_progress {
            let bar = ProgressBar::new(self.trials as u64);
            bar.set_style(
                ProgressStyle::default_bar()
                    .template("Thinking: {bar:40.cyan/blue} {pos}/{len} rollouts")
                    .progress_chars("█▓▒░  "),
            );
            Some(bar)
        } else {
            None
        };

        let evaluation = if self.parallel {
            // each trial gets its own generator so the result doesn't depend on scheduling
            let seed: u64 = self.rng.gen();
            let progress = progress.as_ref();
            (0..self.trials)
                .into_par_iter()
                .map(|trial| {
                    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(trial as u64));
                    let result = rollout(*board, to_move, &mut rng);
                    if let Some(bar) = progress {
                        bar.inc(1);
                    }
                    result
                })
                .fold(Evaluation::default, |mut evaluation, result| {
                    if let Some(result) = result {
                        evaluation.record(result);
                    }
                    evaluation
                })
                .reduce(Evaluation::default, Evaluation::merge)
        } else {
            let mut evaluation = Evaluation::default();
            for _ in 0..self.trials {
                if let Some(result) = rollout(*board, to_move, &mut self.rng) {
                    evaluation.record(result);
                }
                if let Some(bar) = &progress {
                    bar.inc(1);
                }
            }
            evaluation
        };

        if let Some(bar) = progress {
            bar.finish_and_clear();
        }

        debug!(
            "{} rollouts for {:?}: totals {:?}, visits {:?}",
            evaluation.num_rollouts(),
            to_move,
            evaluation.totals,
            evaluation.visits
        );
        evaluation
    }

    /// Picks the column with the best accumulated playout score
    ///
    /// Returns `None` if the board has no legal moves.
    pub fn select_move(&mut self, board: &Board, to_move: Cell) -> Option<usize> {
        let best_move = self.evaluate(board, to_move).best_move();
        debug!("selected column {:?} for {:?}", best_move.map(|c| c + 1), to_move);
        best_move
    }
}

impl Default for MonteCarlo {
    fn default() -> Self {
        Self::new()
    }
}
