//! Folding match reports into cumulative win and action tallies.
use serde::Serialize;

use crate::report::{Action, Report, Round, Side};

/// Per-action usage counts for one side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ActionCounts {
    pub charge: u64,
    pub gun: u64,
    pub guard: u64,
}

impl ActionCounts {
    #[must_use]
    pub const fn get(&self, action: Action) -> u64 {
        match action {
            Action::Charge => self.charge,
            Action::Gun => self.gun,
            Action::Guard => self.guard,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.charge
            .saturating_add(self.gun)
            .saturating_add(self.guard)
    }

    fn record(&mut self, action: Action) {
        let slot = match action {
            Action::Charge => &mut self.charge,
            Action::Gun => &mut self.gun,
            Action::Guard => &mut self.guard,
        };
        *slot = slot.saturating_add(1);
    }
}

/// Match wins per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WinCounts {
    pub left: u64,
    pub right: u64,
}

impl WinCounts {
    #[must_use]
    pub const fn get(&self, side: Side) -> u64 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.left.saturating_add(self.right)
    }

    fn record(&mut self, side: Side) {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *slot = slot.saturating_add(1);
    }
}

/// Action usage for both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SideActions {
    pub left: ActionCounts,
    pub right: ActionCounts,
}

impl SideActions {
    #[must_use]
    pub const fn side(&self, side: Side) -> &ActionCounts {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut ActionCounts {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

/// Cumulative tally over every ingested report.
///
/// `total_rounds` counts every round, including rounds whose choices were
/// unrecognized, so per-side action totals never exceed it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Aggregate {
    pub total_rounds: u64,
    pub wins: WinCounts,
    pub actions: SideActions,
}

impl Aggregate {
    /// Fold one report into the tally.
    pub fn ingest(&mut self, report: &Report) {
        if let Some(side) = report.winner {
            self.wins.record(side);
        }
        for round in &report.history {
            self.ingest_round(round);
        }
    }

    fn ingest_round(&mut self, round: &Round) {
        self.total_rounds = self.total_rounds.saturating_add(1);
        let choices = [
            (Side::Left, round.left_choice),
            (Side::Right, round.right_choice),
        ];
        for (side, choice) in choices {
            if let Some(action) = choice {
                self.actions.side_mut(side).record(action);
            }
        }
    }
}

/// Aggregate reports in order.
#[must_use]
pub fn aggregate(reports: &[Report]) -> Aggregate {
    let agg = reports.iter().fold(Aggregate::default(), |mut agg, report| {
        agg.ingest(report);
        agg
    });
    log::debug!(
        "aggregated {} reports: {} rounds, wins left {} right {}",
        reports.len(),
        agg.total_rounds,
        agg.wins.left,
        agg.wins.right
    );
    agg
}
