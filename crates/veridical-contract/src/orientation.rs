//! Orientation labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ContractError;

/// Truth commitment a sentence implies for an embedded proposition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// The reader is committed to the proposition being true.
    #[default]
    Positive,
    /// The reader is committed to the proposition being false.
    Negative,
    /// No commitment either way.
    Neutral,
}

impl Orientation {
    pub const ALL: [Orientation; 3] = [
        Orientation::Positive,
        Orientation::Negative,
        Orientation::Neutral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Positive => "positive",
            Orientation::Negative => "negative",
            Orientation::Neutral => "neutral",
        }
    }

    /// Positive ↔ negative; neutral stays neutral.
    pub fn flipped(self) -> Self {
        match self {
            Orientation::Positive => Orientation::Negative,
            Orientation::Negative => Orientation::Positive,
            Orientation::Neutral => Orientation::Neutral,
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Orientation::Positive),
            "negative" => Ok(Orientation::Negative),
            "neutral" => Ok(Orientation::Neutral),
            other => Err(ContractError::UnknownOrientation(other.to_string())),
        }
    }
}
