//! Core roster types: attributes, players, teams, partitions.

/// One of the four numeric skill dimensions used for balancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Speed,
    Attack,
    Defense,
    Stamina,
}

impl Attribute {
    /// All attributes, in fixed display order.
    pub const ALL: [Attribute; 4] = [
        Attribute::Speed,
        Attribute::Attack,
        Attribute::Defense,
        Attribute::Stamina,
    ];

    /// Short label, suitable for radar-chart axes and table headers.
    pub fn label(self) -> &'static str {
        match self {
            Attribute::Speed => "speed",
            Attribute::Attack => "attack",
            Attribute::Defense => "defense",
            Attribute::Stamina => "stamina",
        }
    }
}

/// A single roster entry.
///
/// Attributes are `f64`; typical source data carries small non-negative
/// integers, but any real values work. The name is an identifier for
/// display and never participates in scoring.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub name: String,
    pub speed: f64,
    pub attack: f64,
    pub defense: f64,
    pub stamina: f64,
}

impl Player {
    pub fn new(
        name: impl Into<String>,
        speed: f64,
        attack: f64,
        defense: f64,
        stamina: f64,
    ) -> Self {
        Self {
            name: name.into(),
            speed,
            attack,
            defense,
            stamina,
        }
    }

    /// Returns the value of a single attribute.
    pub fn attribute(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Speed => self.speed,
            Attribute::Attack => self.attack,
            Attribute::Defense => self.defense,
            Attribute::Stamina => self.stamina,
        }
    }

    /// Mean of the player's own four attributes.
    pub fn overall_mean(&self) -> f64 {
        (self.speed + self.attack + self.defense + self.stamina) / 4.0
    }
}

/// One team of a partition. Player order within a team carries no meaning.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    pub players: Vec<Player>,
}

impl Team {
    pub fn new(players: Vec<Player>) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Mean of one attribute across the team's members.
    ///
    /// Returns 0.0 for an empty team.
    pub fn attribute_mean(&self, attribute: Attribute) -> f64 {
        if self.players.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.players.iter().map(|p| p.attribute(attribute)).sum();
        sum / self.players.len() as f64
    }

    /// Mean, over the team's members, of each member's own overall mean.
    ///
    /// Returns 0.0 for an empty team.
    pub fn overall_mean(&self) -> f64 {
        if self.players.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.players.iter().map(Player::overall_mean).sum();
        sum / self.players.len() as f64
    }

    /// Per-attribute means in [`Attribute::ALL`] order.
    ///
    /// This is the polygon data a radar/spider renderer plots per team.
    pub fn attribute_means(&self) -> [f64; 4] {
        let mut means = [0.0; 4];
        for (slot, attribute) in means.iter_mut().zip(Attribute::ALL) {
            *slot = self.attribute_mean(attribute);
        }
        means
    }
}

/// An assignment of every roster player to exactly one team.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Partition {
    pub teams: Vec<Team>,
}

impl Partition {
    /// Builds a partition by slicing an ordered player sequence into
    /// contiguous chunks of `team_size`.
    ///
    /// # Panics
    ///
    /// Panics if `team_size` is zero or `players.len()` is not a multiple of
    /// `team_size`.
    pub fn from_ordered(players: Vec<Player>, team_size: usize) -> Self {
        assert!(team_size > 0, "team_size must be positive");
        assert!(
            players.len() % team_size == 0,
            "{} players cannot be sliced into teams of {}",
            players.len(),
            team_size
        );

        let mut teams = Vec::with_capacity(players.len() / team_size);
        let mut players = players;
        while !players.is_empty() {
            let rest = players.split_off(team_size);
            teams.push(Team::new(players));
            players = rest;
        }
        Self { teams }
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// Total number of players across all teams.
    pub fn player_count(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }
}
