//! Simulation parameter definitions and validation

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Defaults matching the interactive front end this engine backs, shared by
/// the CLI and the Lambda endpoint.
pub const DEFAULT_INITIAL_LOAN: f64 = 320_000.0;
pub const DEFAULT_CONSTRUCTION_COST_PER_SQFT: f64 = 175.0;
pub const DEFAULT_SELLING_PRICE_PER_SQFT: f64 = 250.0;
pub const DEFAULT_HOUSE_SQFT: f64 = 2_000.0;
pub const DEFAULT_CONSTRUCTION_MONTHS: u32 = 5;
pub const DEFAULT_SIMULATION_MONTHS: u32 = 24;
pub const DEFAULT_MAX_SIMULTANEOUS_BUILDS: u32 = 1;

// Upper input bounds, also from the front end. Together with the lower
// bounds enforced in validate(), they keep every monetary quantity well
// inside the exactly-representable integer range of f64.
const MAX_INITIAL_LOAN: f64 = 1_000_000.0;
const MAX_CONSTRUCTION_COST_PER_SQFT: f64 = 500.0;
const MAX_SELLING_PRICE_PER_SQFT: f64 = 1_000.0;
const MAX_HOUSE_SQFT: f64 = 10_000.0;
const MAX_CONSTRUCTION_MONTHS: u32 = 24;
const MAX_SIMULATION_MONTHS: u32 = 120;
const MAX_CONCURRENT_BUILDS: u32 = 10;

/// Rejected parameter value, reported with the documented bounds
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// Value fell outside its inclusive input range
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Value must be strictly positive
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
}

/// Complete input bundle for one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationParameters {
    /// Starting loan draw, arriving as opening cash and owed in full
    pub initial_loan: f64,
    /// Construction cost per square foot
    pub construction_cost_per_sqft: f64,
    /// Selling price per square foot
    pub selling_price_per_sqft: f64,
    /// Size of each house in square feet
    pub house_sqft: f64,
    /// Months to build one house
    pub construction_months: u32,
    /// Number of months to simulate
    pub simulation_months: u32,
    /// Maximum houses under construction at once
    pub max_simultaneous_builds: u32,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            initial_loan: DEFAULT_INITIAL_LOAN,
            construction_cost_per_sqft: DEFAULT_CONSTRUCTION_COST_PER_SQFT,
            selling_price_per_sqft: DEFAULT_SELLING_PRICE_PER_SQFT,
            house_sqft: DEFAULT_HOUSE_SQFT,
            construction_months: DEFAULT_CONSTRUCTION_MONTHS,
            simulation_months: DEFAULT_SIMULATION_MONTHS,
            max_simultaneous_builds: DEFAULT_MAX_SIMULTANEOUS_BUILDS,
        }
    }
}

impl SimulationParameters {
    /// Check every field against its documented input range.
    ///
    /// Validation happens once at the boundary (CLI, scenario loader, or
    /// Lambda request); the engine assumes a validated bundle.
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_range("initial_loan", self.initial_loan, 0.0, MAX_INITIAL_LOAN)?;
        check_range(
            "construction_cost_per_sqft",
            self.construction_cost_per_sqft,
            0.0,
            MAX_CONSTRUCTION_COST_PER_SQFT,
        )?;
        check_range(
            "selling_price_per_sqft",
            self.selling_price_per_sqft,
            0.0,
            MAX_SELLING_PRICE_PER_SQFT,
        )?;
        if self.house_sqft <= 0.0 {
            return Err(ParameterError::NotPositive {
                field: "house_sqft",
                value: self.house_sqft,
            });
        }
        check_range("house_sqft", self.house_sqft, 0.0, MAX_HOUSE_SQFT)?;
        check_count(
            "construction_months",
            self.construction_months,
            1,
            MAX_CONSTRUCTION_MONTHS,
        )?;
        check_count(
            "simulation_months",
            self.simulation_months,
            1,
            MAX_SIMULATION_MONTHS,
        )?;
        check_count(
            "max_simultaneous_builds",
            self.max_simultaneous_builds,
            1,
            MAX_CONCURRENT_BUILDS,
        )?;
        Ok(())
    }

    /// Derive the per-house economics for this bundle
    pub fn economics(&self) -> HouseEconomics {
        HouseEconomics::from_params(self)
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ParameterError> {
    // NaN fails the inclusive comparison and is rejected with the others
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ParameterError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn check_count(field: &'static str, value: u32, min: u32, max: u32) -> Result<(), ParameterError> {
    if value >= min && value <= max {
        Ok(())
    } else {
        Err(ParameterError::OutOfRange {
            field,
            value: f64::from(value),
            min: f64::from(min),
            max: f64::from(max),
        })
    }
}

/// Per-house constants derived once from a parameter bundle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseEconomics {
    /// Full cost to build one house, paid upfront at start
    pub construction_cost: f64,
    /// Full sale proceeds for one house, received at completion
    pub selling_price: f64,
    /// Margin per house sold
    pub profit_per_house: f64,
}

impl HouseEconomics {
    pub fn from_params(params: &SimulationParameters) -> Self {
        let construction_cost = params.house_sqft * params.construction_cost_per_sqft;
        let selling_price = params.house_sqft * params.selling_price_per_sqft;
        Self {
            construction_cost,
            selling_price,
            profit_per_house: selling_price - construction_cost,
        }
    }
}

/// Named parameter bundle, as loaded from a scenario file
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub name: String,
    pub params: SimulationParameters,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_are_valid() {
        let params = SimulationParameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.initial_loan, 320_000.0);
        assert_eq!(params.max_simultaneous_builds, 1);
    }

    #[test]
    fn test_economics_derivation() {
        let params = SimulationParameters::default();
        let economics = params.economics();

        assert_relative_eq!(economics.construction_cost, 350_000.0);
        assert_relative_eq!(economics.selling_price, 500_000.0);
        assert_relative_eq!(economics.profit_per_house, 150_000.0);
    }

    #[test]
    fn test_negative_loan_rejected() {
        let params = SimulationParameters {
            initial_loan: -1.0,
            ..Default::default()
        };
        let err = params.validate().unwrap_err();
        assert!(err.to_string().contains("initial_loan"));
        assert!(err.to_string().contains("1000000"));
    }

    #[test]
    fn test_zero_house_sqft_rejected() {
        let params = SimulationParameters {
            house_sqft: 0.0,
            ..Default::default()
        };
        assert_eq!(
            params.validate().unwrap_err(),
            ParameterError::NotPositive {
                field: "house_sqft",
                value: 0.0
            }
        );
    }

    #[test]
    fn test_count_bounds_rejected() {
        let zero_months = SimulationParameters {
            simulation_months: 0,
            ..Default::default()
        };
        assert!(zero_months.validate().is_err());

        let too_long = SimulationParameters {
            simulation_months: 121,
            ..Default::default()
        };
        assert!(too_long.validate().is_err());

        let too_many_builds = SimulationParameters {
            max_simultaneous_builds: 11,
            ..Default::default()
        };
        assert!(too_many_builds.validate().is_err());
    }

    #[test]
    fn test_boundary_values_accepted() {
        let params = SimulationParameters {
            initial_loan: 0.0,
            construction_cost_per_sqft: 500.0,
            selling_price_per_sqft: 1_000.0,
            house_sqft: 10_000.0,
            construction_months: 24,
            simulation_months: 120,
            max_simultaneous_builds: 10,
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_nan_rejected() {
        let params = SimulationParameters {
            initial_loan: f64::NAN,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }
}
