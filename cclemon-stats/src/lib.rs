//! CC Lemon report statistics
//!
//! Loads match-history reports produced by the CC Lemon simulation, folds them
//! into win and action tallies, and suggests CPU action weights from the
//! left player's observed habits. This crate has no CLI or output concerns.

pub mod aggregate;
pub mod loader;
pub mod report;
pub mod weights;

// Re-export commonly used types
pub use aggregate::{ActionCounts, Aggregate, SideActions, WinCounts, aggregate};
pub use loader::{LoadError, load_report, load_reports};
pub use report::{Action, Report, Round, Side};
pub use weights::{WeightFloors, WeightSuggestion, suggest_weights, suggest_weights_with};
