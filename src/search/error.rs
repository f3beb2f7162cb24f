//! Search error types.

use thiserror::Error;

/// Errors raised before any search work begins. The runner never retries
/// and never swallows these; the caller owns user-facing messaging.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The roster cannot be divided into the requested team geometry.
    #[error("roster of {players} players cannot form {team_count} teams of {team_size}")]
    InvalidRosterSize {
        players: usize,
        team_count: usize,
        team_size: usize,
    },

    /// The configuration failed validation.
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_roster_size_message() {
        let err = SearchError::InvalidRosterSize {
            players: 19,
            team_count: 3,
            team_size: 6,
        };
        assert_eq!(
            err.to_string(),
            "roster of 19 players cannot form 3 teams of 6"
        );
    }
}
