//! Veridicality categories and the orientation classes they collapse to.
//!
//! A category is the name of a lexicon file (`factive_verbs`,
//! `negative_sources`, ...). The combinator only cares about the five
//! classes; everything upstream works with categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ContractError;

/// Lexicon category of a veridicality trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Causals,
    Conditionals,
    CounterFactiveVerbs,
    FactiveVerbs,
    FactiveNouns,
    NegativeAdjectives,
    NegativeNouns,
    NegativeSources,
    NegativeVerbs,
    NeutralVerbs,
    PositiveAdjectives,
    PositiveNouns,
    PositiveVerbs,
}

/// Orientation class a category collapses to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationClass {
    Neutral,
    Counterfactive,
    Factive,
    Negative,
    Positive,
}

impl Category {
    /// Every recognized category.
    pub const ALL: [Category; 13] = [
        Category::Causals,
        Category::Conditionals,
        Category::CounterFactiveVerbs,
        Category::FactiveVerbs,
        Category::FactiveNouns,
        Category::NegativeAdjectives,
        Category::NegativeNouns,
        Category::NegativeSources,
        Category::NegativeVerbs,
        Category::NeutralVerbs,
        Category::PositiveAdjectives,
        Category::PositiveNouns,
        Category::PositiveVerbs,
    ];

    /// Lexicon file name / node label for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Causals => "causals",
            Category::Conditionals => "conditionals",
            Category::CounterFactiveVerbs => "counter_factive_verbs",
            Category::FactiveVerbs => "factive_verbs",
            Category::FactiveNouns => "factive_nouns",
            Category::NegativeAdjectives => "negative_adjectives",
            Category::NegativeNouns => "negative_nouns",
            Category::NegativeSources => "negative_sources",
            Category::NegativeVerbs => "negative_verbs",
            Category::NeutralVerbs => "neutral_verbs",
            Category::PositiveAdjectives => "positive_adjectives",
            Category::PositiveNouns => "positive_nouns",
            Category::PositiveVerbs => "positive_verbs",
        }
    }

    pub fn class(&self) -> OrientationClass {
        match self {
            Category::Causals | Category::Conditionals | Category::NeutralVerbs => {
                OrientationClass::Neutral
            }
            Category::CounterFactiveVerbs => OrientationClass::Counterfactive,
            Category::FactiveVerbs | Category::FactiveNouns => OrientationClass::Factive,
            Category::NegativeAdjectives
            | Category::NegativeNouns
            | Category::NegativeSources
            | Category::NegativeVerbs => OrientationClass::Negative,
            Category::PositiveAdjectives | Category::PositiveNouns | Category::PositiveVerbs => {
                OrientationClass::Positive
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ContractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| ContractError::UnknownCategory(s.to_string()))
    }
}

impl OrientationClass {
    pub const ALL: [OrientationClass; 5] = [
        OrientationClass::Neutral,
        OrientationClass::Counterfactive,
        OrientationClass::Factive,
        OrientationClass::Negative,
        OrientationClass::Positive,
    ];
}

impl fmt::Display for OrientationClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OrientationClass::Neutral => "neutral",
            OrientationClass::Counterfactive => "counterfactive",
            OrientationClass::Factive => "factive",
            OrientationClass::Negative => "negative",
            OrientationClass::Positive => "positive",
        };
        f.write_str(s)
    }
}
