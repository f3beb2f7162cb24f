//! Roster data model.
//!
//! A roster is a flat sequence of [`Player`] records, each carrying a name
//! and four numeric skill attributes. The search output groups players into
//! equally sized [`Team`]s collected in a [`Partition`]. Names identify
//! players for display only — scoring depends on attribute values alone.

mod types;

pub use types::{Attribute, Partition, Player, Team};
