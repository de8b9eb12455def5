//! Orientation combinator: `(orientation, frozen) × category → state'`
//!
//! Starts at positive/unfrozen. Neutral is absorbing. Factive and
//! counterfactive triggers latch `frozen`; a frozen state keeps its
//! orientation for the rest of the sentence.

use std::fmt;

use serde::{Deserialize, Serialize};
use veridical_contract::{Category, Orientation, OrientationClass};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrientationState {
    pub orientation: Orientation,
    /// One-way latch.
    pub frozen: bool,
}

impl OrientationState {
    pub fn new(orientation: Orientation, frozen: bool) -> Self {
        Self {
            orientation,
            frozen,
        }
    }

    /// Apply one trigger of the given class.
    pub fn update(self, class: OrientationClass) -> Self {
        use Orientation::*;

        if self.orientation == Neutral {
            return self;
        }

        match class {
            OrientationClass::Factive => Self::new(self.orientation, true),
            OrientationClass::Positive => self,
            _ if self.frozen => self,
            OrientationClass::Neutral => Self::new(Neutral, false),
            OrientationClass::Negative => Self::new(self.orientation.flipped(), false),
            OrientationClass::Counterfactive => {
                let next = match self.orientation {
                    Positive => Negative,
                    _ => Neutral,
                };
                Self::new(next, true)
            }
        }
    }

    /// [`update`](Self::update) with the category's class.
    pub fn apply(self, category: Category) -> Self {
        self.update(category.class())
    }
}

impl fmt::Display for OrientationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.frozen {
            write!(f, "{} (frozen)", self.orientation)
        } else {
            write!(f, "{}", self.orientation)
        }
    }
}
