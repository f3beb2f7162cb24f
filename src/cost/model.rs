//! Per-attribute dispersion cost.
//!
//! The score penalizes two things: dispersion of the team means of each
//! individual attribute (teams must match each other on every skill, not
//! just overall), and dispersion of the team overall means (a secondary
//! term favoring overall parity). Both use the population standard
//! deviation — the number of team means compared is small and fixed, so
//! there is no sample correction.

use super::types::CostModel;
use crate::roster::{Attribute, Player};

/// The reference imbalance score.
///
/// For each attribute, computes every team's mean of that attribute and
/// adds the population standard deviation of those means; then adds the
/// population standard deviation of the team overall means (mean of each
/// member's own four-attribute mean). Zero if and only if every team has
/// identical per-attribute and overall means.
#[derive(Debug, Clone, Copy, Default)]
pub struct BalanceCost;

impl CostModel for BalanceCost {
    fn cost(&self, teams: &[&[Player]]) -> f64 {
        let mut means = Vec::with_capacity(teams.len());
        let mut total = 0.0;

        for attribute in Attribute::ALL {
            means.clear();
            means.extend(teams.iter().map(|team| attribute_mean(team, attribute)));
            total += population_std_dev(&means);
        }

        means.clear();
        means.extend(teams.iter().map(|team| overall_mean(team)));
        total + population_std_dev(&means)
    }
}

/// Population standard deviation (divide by N, not N-1).
///
/// Returns 0.0 for an empty slice.
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

fn attribute_mean(players: &[Player], attribute: Attribute) -> f64 {
    let sum: f64 = players.iter().map(|p| p.attribute(attribute)).sum();
    sum / players.len() as f64
}

fn overall_mean(players: &[Player]) -> f64 {
    let sum: f64 = players.iter().map(Player::overall_mean).sum();
    sum / players.len() as f64
}
