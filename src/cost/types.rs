//! Core trait for partition scoring.

use crate::roster::Player;

/// Scores one candidate split of the roster.
///
/// `teams` holds one slice of players per team. The slices are disjoint and
/// equally sized; the runner guarantees this before calling, and the model
/// does not re-validate it.
///
/// # Purity
///
/// Implementations must depend only on the attribute values of the players
/// handed in — no hidden state, no player-identity dependence — so that
/// repeated evaluation of the same split is deterministic. The runner may
/// evaluate candidates in parallel, hence `Send + Sync`.
pub trait CostModel: Send + Sync {
    /// Computes the imbalance score. Lower is better; never negative for
    /// finite inputs.
    fn cost(&self, teams: &[&[Player]]) -> f64;
}
