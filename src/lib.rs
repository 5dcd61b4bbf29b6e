//! Homebuilding Simulator - deterministic cash flow engine for a spec homebuilding business
//!
//! This library provides:
//! - Month-by-month simulation of cash, loan balance, and construction throughput
//! - A fixed financing policy: shortfall borrowing at build start, full-cash loan paydown
//! - Batch comparison across named scenarios
//! - Monthly series reporting and CSV export

pub mod params;
pub mod report;
pub mod scenario;
pub mod simulation;

// Re-export commonly used types
pub use params::{ParameterError, Scenario, SimulationParameters};
pub use scenario::{ScenarioOutcome, ScenarioRunner};
pub use simulation::{MonthlySnapshot, SimulationEngine, SimulationResult, SimulationSummary};
