//! CPU weight suggestions derived from observed left-side play.
//!
//! The suggestion mirrors the left player's action usage so a CPU opponent
//! drawing from it imitates that player. Usage is floored per action and the
//! result renormalized, so no action can ever drop to zero probability.
//!
//! Only the left side is considered. Right-side usage is tallied by the
//! aggregator but does not feed the suggestion.
use serde::{Deserialize, Serialize};

use crate::aggregate::{ActionCounts, Aggregate};
use crate::report::Action;

/// Minimum usage applied to each action before renormalization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightFloors {
    pub charge: f64,
    pub gun: f64,
    pub guard: f64,
}

impl Default for WeightFloors {
    fn default() -> Self {
        Self {
            charge: 0.2,
            gun: 0.2,
            guard: 0.15,
        }
    }
}

impl WeightFloors {
    #[must_use]
    pub const fn get(&self, action: Action) -> f64 {
        match action {
            Action::Charge => self.charge,
            Action::Gun => self.gun,
            Action::Guard => self.guard,
        }
    }
}

/// Suggested action probabilities, rounded to two decimals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightSuggestion {
    pub charge: f64,
    pub gun: f64,
    pub guard: f64,
}

impl WeightSuggestion {
    #[must_use]
    pub const fn get(&self, action: Action) -> f64 {
        match action {
            Action::Charge => self.charge,
            Action::Gun => self.gun,
            Action::Guard => self.guard,
        }
    }

    /// Sum of the three probabilities. Within 0.01 of 1.0 after rounding.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.charge + self.gun + self.guard
    }
}

/// Suggest left-side weights using the default floors.
#[must_use]
pub fn suggest_weights(agg: &Aggregate) -> WeightSuggestion {
    suggest_weights_with(agg, &WeightFloors::default())
}

/// Suggest left-side weights using explicit floors.
///
/// With no observed left actions every usage ratio is zero and the floors
/// alone decide the split.
#[must_use]
pub fn suggest_weights_with(agg: &Aggregate, floors: &WeightFloors) -> WeightSuggestion {
    let counts = &agg.actions.left;
    let floored = Action::ALL.map(|action| usage(counts, action).max(floors.get(action)));
    let total: f64 = floored.iter().sum();
    if total <= 0.0 {
        // only reachable with all-zero floors and no observed actions
        let even = round_to_cents(1.0 / 3.0);
        return WeightSuggestion {
            charge: even,
            gun: even,
            guard: even,
        };
    }
    let [charge, gun, guard] = floored.map(|weight| round_to_cents(weight / total));
    WeightSuggestion { charge, gun, guard }
}

#[allow(clippy::cast_precision_loss)]
fn usage(counts: &ActionCounts, action: Action) -> f64 {
    let sum = counts.total().max(1);
    counts.get(action) as f64 / sum as f64
}

/// Round half up on the exact binary value, never on a rescaled copy.
fn round_to_cents(value: f64) -> f64 {
    // exact x.xx5 ties are precisely the odd multiples of 1/8
    let eighths = value * 8.0;
    if eighths.fract() == 0.0 && eighths % 2.0 != 0.0 {
        return (value * 100.0).ceil() / 100.0;
    }
    format!("{value:.2}").parse().unwrap_or(value)
}
