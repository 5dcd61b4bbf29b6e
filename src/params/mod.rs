//! Simulation parameters, validation, and scenario definitions

mod data;
pub mod loader;

pub use data::{
    HouseEconomics, ParameterError, Scenario, SimulationParameters,
    DEFAULT_CONSTRUCTION_COST_PER_SQFT, DEFAULT_CONSTRUCTION_MONTHS, DEFAULT_HOUSE_SQFT,
    DEFAULT_INITIAL_LOAN, DEFAULT_MAX_SIMULTANEOUS_BUILDS, DEFAULT_SELLING_PRICE_PER_SQFT,
    DEFAULT_SIMULATION_MONTHS,
};
pub use loader::{load_default_scenarios, load_scenarios, load_scenarios_from_reader};
