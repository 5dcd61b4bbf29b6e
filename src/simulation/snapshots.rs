//! Monthly output rows and run-level summary metrics

use serde::{Deserialize, Serialize};

use crate::params::HouseEconomics;

/// Recorded state at the end of one simulated month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlySnapshot {
    /// Month index, 0-based from simulation start
    pub month: u32,
    /// Cash on hand after the month's completions, starts, and loan paydown
    pub cash: f64,
    /// Outstanding loan principal at month end
    pub loan_balance: f64,
    /// Houses under construction at month end
    pub under_construction: u32,
    /// Cumulative houses completed and sold
    pub houses_completed: u32,
}

/// Complete output of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Per-house constants the run was priced with
    pub economics: HouseEconomics,
    /// One snapshot per simulated month, in chronological order
    pub monthly: Vec<MonthlySnapshot>,
}

impl SimulationResult {
    pub fn new(economics: HouseEconomics, months: u32) -> Self {
        Self {
            economics,
            monthly: Vec::with_capacity(months as usize),
        }
    }

    /// Append the snapshot for the next month
    pub fn push(&mut self, snapshot: MonthlySnapshot) {
        self.monthly.push(snapshot);
    }

    /// Headline metrics computed from the monthly series
    pub fn summary(&self) -> SimulationSummary {
        let last = self.monthly.last();
        let peak_loan_balance = self
            .monthly
            .iter()
            .map(|s| s.loan_balance)
            .fold(0.0, f64::max);

        SimulationSummary {
            total_months: self.monthly.len() as u32,
            houses_completed: last.map(|s| s.houses_completed).unwrap_or(0),
            final_cash: last.map(|s| s.cash).unwrap_or(0.0),
            final_loan_balance: last.map(|s| s.loan_balance).unwrap_or(0.0),
            peak_loan_balance,
            profit_per_house: self.economics.profit_per_house,
        }
    }
}

/// Headline metrics for one run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub total_months: u32,
    pub houses_completed: u32,
    pub final_cash: f64,
    pub final_loan_balance: f64,
    pub peak_loan_balance: f64,
    pub profit_per_house: f64,
}
