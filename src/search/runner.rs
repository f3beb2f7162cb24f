//! Search execution loop.

use super::config::SearchConfig;
use super::error::SearchError;
use crate::cost::{BalanceCost, CostModel};
use crate::roster::{Partition, Player};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Best cost is sampled into the history every this many iterations.
const HISTORY_INTERVAL: usize = 100;

/// Result of a partition search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best partition found.
    pub best: Partition,

    /// Cost of the best partition.
    pub best_cost: f64,

    /// Iteration index at which the best partition was first seen.
    pub best_iteration: usize,

    /// Number of candidates actually evaluated.
    pub iterations: usize,

    /// Whether cancelled externally.
    pub cancelled: bool,

    /// Best cost sampled at regular intervals for history tracking.
    pub cost_history: Vec<f64>,
}

/// Executes the Monte-Carlo partition search.
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search with the default cost model, [`BalanceCost`].
    pub fn run(roster: &[Player], config: &SearchConfig) -> Result<SearchResult, SearchError> {
        Self::run_with_model(roster, &BalanceCost, config, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the loop stops
    /// at the next iteration boundary and returns the best partition found
    /// so far. At least one candidate is always evaluated, so a cancelled
    /// run still yields a valid partition.
    pub fn run_with_cancel(
        roster: &[Player],
        config: &SearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult, SearchError> {
        Self::run_with_model(roster, &BalanceCost, config, cancel)
    }

    /// Runs the search with a caller-supplied cost model.
    ///
    /// Fails fast, before any sampling, if the configuration is invalid or
    /// the roster length does not equal `team_count * team_size`.
    pub fn run_with_model<C: CostModel>(
        roster: &[Player],
        model: &C,
        config: &SearchConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SearchResult, SearchError> {
        config.validate().map_err(SearchError::InvalidConfig)?;
        if roster.len() != config.team_count * config.team_size {
            return Err(SearchError::InvalidRosterSize {
                players: roster.len(),
                team_count: config.team_count,
                team_size: config.team_size,
            });
        }

        debug!(
            iterations = config.iterations,
            team_count = config.team_count,
            team_size = config.team_size,
            "starting partition search"
        );

        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::seed_from_u64(rand::random()),
        };

        // Owned working copy: the caller's roster is never reordered.
        let mut working: Vec<Player> = roster.to_vec();

        // The first candidate is drawn before any cancellation check so a
        // single-iteration or immediately-cancelled run still returns a
        // valid partition.
        working.shuffle(&mut rng);
        let first_cost = evaluate(model, &working, config.team_size);
        let mut tracker = Tracker {
            best: working.clone(),
            best_cost: first_cost,
            best_iteration: 0,
            history: vec![first_cost],
        };

        #[cfg(feature = "parallel")]
        let (evaluated, cancelled) = if config.parallel {
            search_parallel(
                model,
                config,
                cancel.as_deref(),
                &mut rng,
                &mut working,
                &mut tracker,
            )
        } else {
            search_sequential(
                model,
                config,
                cancel.as_deref(),
                &mut rng,
                &mut working,
                &mut tracker,
            )
        };
        #[cfg(not(feature = "parallel"))]
        let (evaluated, cancelled) = search_sequential(
            model,
            config,
            cancel.as_deref(),
            &mut rng,
            &mut working,
            &mut tracker,
        );

        // Close the history with the final best unless it is already there.
        if tracker
            .history
            .last()
            .is_none_or(|&last| (last - tracker.best_cost).abs() > 1e-15)
        {
            tracker.history.push(tracker.best_cost);
        }

        debug!(
            best_cost = tracker.best_cost,
            best_iteration = tracker.best_iteration,
            iterations = evaluated,
            cancelled,
            "partition search finished"
        );

        Ok(SearchResult {
            best: Partition::from_ordered(tracker.best, config.team_size),
            best_cost: tracker.best_cost,
            best_iteration: tracker.best_iteration,
            iterations: evaluated,
            cancelled,
            cost_history: tracker.history,
        })
    }
}

/// Best-so-far state shared by the sequential and parallel loops.
struct Tracker {
    best: Vec<Player>,
    best_cost: f64,
    best_iteration: usize,
    history: Vec<f64>,
}

impl Tracker {
    /// Folds in one scored candidate. Strict improvement only: the first
    /// candidate to reach a given cost wins, later ties are discarded.
    fn observe(&mut self, iteration: usize, cost: f64, candidate: &[Player]) {
        if cost < self.best_cost {
            self.best_cost = cost;
            self.best_iteration = iteration;
            self.best.clear();
            self.best.extend_from_slice(candidate);
        }
        if (iteration + 1).is_multiple_of(HISTORY_INTERVAL) {
            self.history.push(self.best_cost);
        }
    }
}

/// Score one ordered candidate by slicing it into contiguous teams.
fn evaluate<C: CostModel>(model: &C, candidate: &[Player], team_size: usize) -> f64 {
    let teams: Vec<&[Player]> = candidate.chunks_exact(team_size).collect();
    model.cost(&teams)
}

fn is_cancelled(cancel: Option<&AtomicBool>) -> bool {
    cancel.is_some_and(|flag| flag.load(Ordering::Relaxed))
}

/// Iterations 1.. of the sampling loop, one candidate at a time.
///
/// Returns the number of candidates evaluated (including the first, drawn
/// by the caller) and whether the loop was cancelled.
fn search_sequential<C: CostModel>(
    model: &C,
    config: &SearchConfig,
    cancel: Option<&AtomicBool>,
    rng: &mut ChaCha8Rng,
    working: &mut [Player],
    tracker: &mut Tracker,
) -> (usize, bool) {
    let mut evaluated = 1usize;
    for iteration in 1..config.iterations {
        if is_cancelled(cancel) {
            return (evaluated, true);
        }
        working.shuffle(rng);
        let cost = evaluate(model, working, config.team_size);
        tracker.observe(iteration, cost, working);
        evaluated += 1;
    }
    (evaluated, false)
}

/// Iterations 1.. of the sampling loop with batched parallel evaluation.
///
/// Candidates are still generated one after another from the single RNG
/// stream, and the best-candidate scan walks the batch in iteration order,
/// so the outcome is identical to [`search_sequential`] for the same seed.
/// Only the pure cost evaluations fan out across the rayon pool.
#[cfg(feature = "parallel")]
fn search_parallel<C: CostModel>(
    model: &C,
    config: &SearchConfig,
    cancel: Option<&AtomicBool>,
    rng: &mut ChaCha8Rng,
    working: &mut Vec<Player>,
    tracker: &mut Tracker,
) -> (usize, bool) {
    let mut evaluated = 1usize;
    let mut candidates: Vec<Vec<Player>> = Vec::with_capacity(config.batch_size);
    let mut next = 1usize;

    while next < config.iterations {
        if is_cancelled(cancel) {
            return (evaluated, true);
        }

        let len = config.batch_size.min(config.iterations - next);
        candidates.clear();
        for _ in 0..len {
            working.shuffle(rng);
            candidates.push(working.clone());
        }

        let costs: Vec<f64> = candidates
            .par_iter()
            .map(|candidate| evaluate(model, candidate, config.team_size))
            .collect();

        for (offset, (cost, candidate)) in costs.iter().zip(&candidates).enumerate() {
            tracker.observe(next + offset, *cost, candidate);
        }

        evaluated += len;
        next += len;
    }
    (evaluated, false)
}
