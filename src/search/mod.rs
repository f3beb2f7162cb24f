//! Monte-Carlo partition search.
//!
//! Pure random sampling over the partition space: every iteration draws an
//! independent uniform permutation of the roster, slices it into contiguous
//! equal-size teams, scores the split, and keeps the cheapest one seen.
//! No candidate is derived from the previous one — there is no acceptance
//! schedule to tune, only an iteration budget. The search space for the
//! default geometry (18 players into 3 teams of 6) holds roughly 17
//! million distinct unordered splits, so a 10,000-sample budget reliably
//! lands on a well-balanced, though not provably optimal, partition.
//!
//! This is an anytime loop: the best cost after `k + 1` iterations can only
//! match or improve the best after `k`.

mod config;
mod error;
mod runner;

pub use config::SearchConfig;
pub use error::SearchError;
pub use runner::{SearchResult, SearchRunner};
