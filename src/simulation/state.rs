//! Mutable business state carried across simulated months

use crate::params::SimulationParameters;

/// One house under active construction, occupying a concurrency slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildProject {
    /// Month index at which construction began
    pub start_month: u32,
}

impl BuildProject {
    pub fn new(start_month: u32) -> Self {
        Self { start_month }
    }

    /// Whole months this build has spent in construction as of `month`.
    /// Months are uniform 30-day blocks, so elapsed time reduces to index
    /// subtraction.
    pub fn months_in_construction(&self, month: u32) -> u32 {
        month - self.start_month
    }

    /// A build is complete in the first month its elapsed time reaches the
    /// construction duration.
    pub fn is_complete(&self, month: u32, construction_months: u32) -> bool {
        self.months_in_construction(month) >= construction_months
    }
}

/// State of the business part-way through a run
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    /// Cash available this month; never driven below zero
    pub cash_on_hand: f64,
    /// Outstanding loan principal; no interest accrues
    pub loan_balance: f64,
    /// Houses currently under construction, never more than the concurrency cap
    pub active_builds: Vec<BuildProject>,
    /// Houses completed and sold so far
    pub houses_completed: u32,
}

impl SimulationState {
    /// Starting state: the initial loan arrives as cash and is owed in full,
    /// with no builds underway.
    pub fn from_params(params: &SimulationParameters) -> Self {
        Self {
            cash_on_hand: params.initial_loan,
            loan_balance: params.initial_loan,
            active_builds: Vec::new(),
            houses_completed: 0,
        }
    }

    /// Number of houses currently under construction
    pub fn under_construction(&self) -> u32 {
        self.active_builds.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_mirrors_loan() {
        let params = SimulationParameters::default();
        let state = SimulationState::from_params(&params);

        assert_eq!(state.cash_on_hand, 320_000.0);
        assert_eq!(state.loan_balance, 320_000.0);
        assert_eq!(state.under_construction(), 0);
        assert_eq!(state.houses_completed, 0);
    }

    #[test]
    fn test_build_completes_at_duration() {
        let build = BuildProject::new(3);

        assert_eq!(build.months_in_construction(3), 0);
        assert_eq!(build.months_in_construction(8), 5);
        assert!(!build.is_complete(7, 5));
        assert!(build.is_complete(8, 5));
        assert!(build.is_complete(9, 5));
    }
}
