//! Monthly simulation engine, state, and output types

mod engine;
mod snapshots;
mod state;

pub use engine::SimulationEngine;
pub use snapshots::{MonthlySnapshot, SimulationResult, SimulationSummary};
pub use state::{BuildProject, SimulationState};
