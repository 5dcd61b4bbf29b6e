//! Core monthly simulation engine

use crate::params::{HouseEconomics, SimulationParameters};

use super::snapshots::{MonthlySnapshot, SimulationResult};
use super::state::{BuildProject, SimulationState};

/// Deterministic monthly cash flow simulator for a spec homebuilding
/// business.
///
/// Each month applies a fixed policy in a fixed order: realize builds whose
/// construction time has elapsed, start new builds up to the concurrency cap
/// (borrowing any cash shortfall at start), then pay spare cash against the
/// loan. The engine assumes a validated parameter bundle and cannot fail;
/// equal parameters always produce equal output.
pub struct SimulationEngine {
    params: SimulationParameters,
    economics: HouseEconomics,
}

impl SimulationEngine {
    /// Create an engine for one parameter bundle, deriving the per-house
    /// economics once upfront.
    pub fn new(params: SimulationParameters) -> Self {
        let economics = params.economics();
        Self { params, economics }
    }

    /// Per-house constants this engine prices with
    pub fn economics(&self) -> HouseEconomics {
        self.economics
    }

    /// Run the simulation, producing one snapshot per month
    pub fn run(&self) -> SimulationResult {
        let mut state = SimulationState::from_params(&self.params);
        let mut result = SimulationResult::new(self.economics, self.params.simulation_months);

        for month in 0..self.params.simulation_months {
            self.complete_finished_builds(month, &mut state);
            self.start_new_builds(month, &mut state);
            self.pay_down_loan(&mut state);

            result.push(MonthlySnapshot {
                month,
                cash: state.cash_on_hand,
                loan_balance: state.loan_balance,
                under_construction: state.under_construction(),
                houses_completed: state.houses_completed,
            });
        }

        result
    }

    /// Realize every build whose construction time has elapsed: credit the
    /// full selling price, count the completion, and free the slot.
    ///
    /// Completion is decided against the active set as it stood at the start
    /// of the month; the finished subset is removed in one pass, so builds
    /// started later this month are never considered.
    fn complete_finished_builds(&self, month: u32, state: &mut SimulationState) {
        let before = state.active_builds.len();
        state
            .active_builds
            .retain(|build| !build.is_complete(month, self.params.construction_months));
        let completed = (before - state.active_builds.len()) as u32;

        if completed > 0 {
            state.cash_on_hand += f64::from(completed) * self.economics.selling_price;
            state.houses_completed += completed;
        }
    }

    /// Start builds until the concurrency cap is reached, drawing exactly the
    /// cash shortfall as new borrowing before each start. Borrowing is
    /// uncapped, so under normal arithmetic every free slot is filled.
    fn start_new_builds(&self, month: u32, state: &mut SimulationState) {
        while state.under_construction() < self.params.max_simultaneous_builds {
            if state.cash_on_hand < self.economics.construction_cost {
                let shortfall = self.economics.construction_cost - state.cash_on_hand;
                state.loan_balance += shortfall;
                state.cash_on_hand += shortfall;
            }

            if state.cash_on_hand >= self.economics.construction_cost {
                state.cash_on_hand -= self.economics.construction_cost;
                state.active_builds.push(BuildProject::new(month));
            } else {
                // Shortfall arithmetic can round below the cost; stop this
                // month's starts rather than let cash go negative.
                break;
            }
        }
    }

    /// Apply all spare cash against the outstanding loan
    fn pay_down_loan(&self, state: &mut SimulationState) {
        if state.loan_balance > 0.0 && state.cash_on_hand > 0.0 {
            let payment = state.cash_on_hand.min(state.loan_balance);
            state.loan_balance -= payment;
            state.cash_on_hand -= payment;
        }
    }
}
