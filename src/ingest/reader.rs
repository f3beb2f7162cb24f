//! CSV reading and record validation.

use crate::roster::Player;
use serde::Deserialize;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised while loading a roster file.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A record is missing one of the required numeric attributes, either
    /// because the column is absent or the field is empty.
    #[error("record {row}: missing attribute '{attribute}'")]
    MissingAttribute { row: usize, attribute: &'static str },

    /// An attribute field is present but not numeric.
    #[error("record {row}: attribute '{attribute}' is not numeric: '{value}'")]
    InvalidAttribute {
        row: usize,
        attribute: &'static str,
        value: String,
    },

    #[error("record {row}: missing player name")]
    MissingName { row: usize },

    #[error("roster file contains no player records")]
    EmptyRoster,
}

/// One raw CSV record before validation. Every field is optional so that
/// absent columns and empty fields surface as typed errors rather than
/// serde failures.
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: Option<String>,
    speed: Option<String>,
    attack: Option<String>,
    defense: Option<String>,
    stamina: Option<String>,
}

/// Reads a roster from CSV data with a `name, speed, attack, defense,
/// stamina` header row.
///
/// Attribute values are coerced to `f64` here; nothing downstream performs
/// numeric validation. Returns [`IngestError::EmptyRoster`] if the data
/// holds a header but no records.
pub fn read_roster<R: io::Read>(reader: R) -> Result<Vec<Player>, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut roster = Vec::new();
    for (index, record) in csv_reader.deserialize::<RawRecord>().enumerate() {
        let row = index + 1;
        let record = record?;

        let name = match record.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(IngestError::MissingName { row }),
        };
        let speed = parse_attribute(&record.speed, row, "speed")?;
        let attack = parse_attribute(&record.attack, row, "attack")?;
        let defense = parse_attribute(&record.defense, row, "defense")?;
        let stamina = parse_attribute(&record.stamina, row, "stamina")?;

        roster.push(Player::new(name, speed, attack, defense, stamina));
    }

    if roster.is_empty() {
        return Err(IngestError::EmptyRoster);
    }

    debug!(players = roster.len(), "roster loaded");
    Ok(roster)
}

/// Reads a roster from a CSV file on disk.
pub fn load_roster(path: impl AsRef<Path>) -> Result<Vec<Player>, IngestError> {
    let file = std::fs::File::open(path)?;
    read_roster(io::BufReader::new(file))
}

fn parse_attribute(
    value: &Option<String>,
    row: usize,
    attribute: &'static str,
) -> Result<f64, IngestError> {
    let raw = value.as_deref().map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return Err(IngestError::MissingAttribute { row, attribute });
    }
    raw.parse::<f64>().map_err(|_| IngestError::InvalidAttribute {
        row,
        attribute,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{SearchConfig, SearchRunner};

    #[test]
    fn test_read_valid_roster() {
        let data = "\
name,speed,attack,defense,stamina
ana,10,8,6,7
bruno,12,9,5,8
carla,7,11,9,6
";
        let roster = read_roster(data.as_bytes()).unwrap();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].name, "ana");
        assert_eq!(roster[0].speed, 10.0);
        assert_eq!(roster[2].defense, 9.0);
    }

    #[test]
    fn test_read_accepts_fractional_values() {
        let data = "name,speed,attack,defense,stamina\nana,10.5,8,6,7\n";
        let roster = read_roster(data.as_bytes()).unwrap();
        assert_eq!(roster[0].speed, 10.5);
    }

    #[test]
    fn test_empty_attribute_field_is_rejected() {
        let data = "\
name,speed,attack,defense,stamina
ana,10,8,6,7
bruno,12,9,,8
";
        let err = read_roster(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingAttribute {
                row: 2,
                attribute: "defense"
            }
        ));
    }

    #[test]
    fn test_missing_column_is_rejected() {
        let data = "name,speed,attack,defense\nana,10,8,6\n";
        let err = read_roster(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::MissingAttribute {
                row: 1,
                attribute: "stamina"
            }
        ));
    }

    #[test]
    fn test_non_numeric_attribute_is_rejected() {
        let data = "name,speed,attack,defense,stamina\nana,fast,8,6,7\n";
        let err = read_roster(data.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            IngestError::InvalidAttribute {
                row: 1,
                attribute: "speed",
                ..
            }
        ));
    }

    #[test]
    fn test_missing_name_is_rejected() {
        let data = "name,speed,attack,defense,stamina\n,10,8,6,7\n";
        let err = read_roster(data.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::MissingName { row: 1 }));
    }

    #[test]
    fn test_header_only_is_empty_roster() {
        let data = "name,speed,attack,defense,stamina\n";
        let err = read_roster(data.as_bytes()).unwrap_err();
        assert!(matches!(err, IngestError::EmptyRoster));
    }

    #[test]
    fn test_ingested_roster_feeds_search() {
        let data = "\
name,speed,attack,defense,stamina
ana,10,8,6,7
bruno,12,9,5,8
carla,7,11,9,6
diego,9,6,12,10
elena,14,7,4,9
fabio,6,10,8,5
";
        let roster = read_roster(data.as_bytes()).unwrap();
        let config = SearchConfig::default()
            .with_iterations(100)
            .with_team_count(3)
            .with_team_size(2)
            .with_seed(42);

        let result = SearchRunner::run(&roster, &config).unwrap();

        assert_eq!(result.best.team_count(), 3);
        assert_eq!(result.best.player_count(), 6);
    }
}
