//! Match report data model.
//!
//! Reports are decoded leniently: a malformed `winner`, `history` or choice
//! field never fails the parse, it simply contributes nothing.
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Native winner sentinel for the left player.
pub const LEFT_WINNER_KEY: &str = "左";
/// Native winner sentinel for the right player.
pub const RIGHT_WINNER_KEY: &str = "右";

/// One of the two players in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Decode a report's `winner` value. Only the native sentinels match.
    #[must_use]
    pub fn from_winner(raw: &str) -> Option<Self> {
        match raw {
            LEFT_WINNER_KEY => Some(Self::Left),
            RIGHT_WINNER_KEY => Some(Self::Right),
            _ => None,
        }
    }
}

/// Action a side may pick in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Build up a charge for a later shot
    Charge,
    /// Spend a charge to shoot
    Gun,
    /// Block an incoming shot
    Guard,
}

impl Action {
    pub const ALL: [Self; 3] = [Self::Charge, Self::Gun, Self::Guard];

    /// Look up an action by its report key. Keys are case-sensitive.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "charge" => Some(Self::Charge),
            "gun" => Some(Self::Gun),
            "guard" => Some(Self::Guard),
            _ => None,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Charge => "charge",
            Self::Gun => "gun",
            Self::Guard => "guard",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A single exchange within a match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Round {
    pub left_choice: Option<Action>,
    pub right_choice: Option<Action>,
}

impl Round {
    #[must_use]
    pub const fn new(left_choice: Option<Action>, right_choice: Option<Action>) -> Self {
        Self {
            left_choice,
            right_choice,
        }
    }

    /// Decode a `history` entry. Anything that is not an object is a round
    /// without choices.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            left_choice: choice_field(value, "leftChoice"),
            right_choice: choice_field(value, "rightChoice"),
        }
    }
}

/// One recorded match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub winner: Option<Side>,
    pub history: Vec<Round>,
}

impl Report {
    /// Parse a report from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error only if the text is not valid JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Decode a report from an already parsed JSON document.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let winner = match value.get("winner") {
            None | Some(Value::Null) => None,
            Some(raw) => {
                let side = raw.as_str().and_then(Side::from_winner);
                if side.is_none() {
                    log::debug!("ignoring unrecognized winner {raw}");
                }
                side
            }
        };
        let history = value
            .get("history")
            .and_then(Value::as_array)
            .map(|rounds| rounds.iter().map(Round::from_value).collect())
            .unwrap_or_default();
        Self { winner, history }
    }

    #[must_use]
    pub fn round_count(&self) -> usize {
        self.history.len()
    }
}

impl<'de> Deserialize<'de> for Report {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

fn choice_field(round: &Value, field: &str) -> Option<Action> {
    let raw = round.get(field)?;
    let action = raw.as_str().and_then(Action::from_key);
    if action.is_none() && !raw.is_null() {
        log::debug!("skipping unrecognized {field} {raw}");
    }
    action
}
