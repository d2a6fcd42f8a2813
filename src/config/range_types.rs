use crate::layout::constants::{DEFAULT_MAX_ATTEMPTS, MAX_ATTEMPT_BUDGET};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Docking attempt budget per region, constrained to [1, 10000]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct AttemptBudget(u32);

impl AttemptBudget {
    const MIN: u32 = 1;
    const MAX: u32 = MAX_ATTEMPT_BUDGET;

    pub fn new(value: u32) -> Self {
        Self(value.clamp(Self::MIN, Self::MAX))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for AttemptBudget {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl From<u32> for AttemptBudget {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<AttemptBudget> for u32 {
    fn from(budget: AttemptBudget) -> Self {
        budget.0
    }
}
