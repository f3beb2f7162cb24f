//! Balanced team partitioning for fixed-size rosters.
//!
//! Splits a roster of players into equally sized teams so that per-attribute
//! team averages (speed, attack, defense, stamina) end up as close to each
//! other as possible. There is no closed-form optimum for this partition
//! problem, so the crate pairs a pure cost function with a Monte-Carlo
//! sampler over the partition space:
//!
//! - **roster**: the data model — [`Player`](roster::Player),
//!   [`Team`](roster::Team), [`Partition`](roster::Partition), and the four
//!   [`Attribute`](roster::Attribute) axes.
//! - **cost**: [`CostModel`](cost::CostModel) trait plus
//!   [`BalanceCost`](cost::BalanceCost), which sums the population standard
//!   deviations of per-team attribute means and adds an overall-mean
//!   dispersion term.
//! - **search**: [`SearchRunner`](search::SearchRunner) — repeated
//!   independent shuffle-and-slice sampling with best-so-far retention. An
//!   anytime algorithm: more iterations can only match or improve the
//!   returned cost.
//! - **ingest** (feature `csv`): CSV roster loading with typed errors.
//!
//! # Example
//!
//! ```
//! use team_balance::roster::Player;
//! use team_balance::search::{SearchConfig, SearchRunner};
//!
//! let roster: Vec<Player> = (0..6)
//!     .map(|i| Player::new(format!("p{i}"), 10.0, 8.0, 6.0, 7.0))
//!     .collect();
//!
//! let config = SearchConfig::default()
//!     .with_iterations(200)
//!     .with_team_count(3)
//!     .with_team_size(2)
//!     .with_seed(42);
//!
//! let result = SearchRunner::run(&roster, &config).unwrap();
//! assert_eq!(result.best.teams.len(), 3);
//! ```

pub mod cost;
#[cfg(feature = "csv")]
pub mod ingest;
pub mod roster;
pub mod search;
