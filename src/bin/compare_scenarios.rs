//! Compare simulation outcomes across named scenarios
//!
//! Loads scenario definitions from a CSV (default: data/scenarios.csv), runs
//! them all in parallel, prints a ranked comparison, and writes the combined
//! monthly series for charting.
//!
//! Usage: cargo run --bin compare_scenarios [scenarios.csv]

use homebuilding_simulator::params::loader::DEFAULT_SCENARIOS_PATH;
use homebuilding_simulator::ScenarioRunner;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_SCENARIOS_PATH.to_string());

    let start = Instant::now();
    println!("Loading scenarios from {}...", path);
    let runner = ScenarioRunner::from_csv_path(Path::new(&path)).expect("Failed to load scenarios");
    println!(
        "Loaded {} scenarios in {:?}",
        runner.scenarios().len(),
        start.elapsed()
    );

    println!("Running simulations...");
    let run_start = Instant::now();
    let outcomes = runner.run_all();
    println!("Simulations complete in {:?}\n", run_start.elapsed());

    // Rank by final cash position
    let mut ranked: Vec<_> = outcomes
        .iter()
        .map(|o| (o.name.as_str(), o.result.summary()))
        .collect();
    ranked.sort_by(|a, b| b.1.final_cash.total_cmp(&a.1.final_cash));

    println!(
        "{:<20} {:>7} {:>7} {:>14} {:>14} {:>14} {:>14}",
        "Scenario", "Months", "Houses", "Final Cash", "Final Loan", "Peak Loan", "Profit/House"
    );
    println!("{}", "-".repeat(95));
    for (name, summary) in &ranked {
        println!(
            "{:<20} {:>7} {:>7} {:>14.2} {:>14.2} {:>14.2} {:>14.2}",
            name,
            summary.total_months,
            summary.houses_completed,
            summary.final_cash,
            summary.final_loan_balance,
            summary.peak_loan_balance,
            summary.profit_per_house,
        );
    }

    // Combined long-format series for charting
    let output_path = "scenario_comparison.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(
        file,
        "Scenario,Month,Cash,Loan Balance,Under Construction,Houses Completed"
    )
    .unwrap();

    for outcome in &outcomes {
        for snapshot in &outcome.result.monthly {
            writeln!(
                file,
                "{},{},{:.2},{:.2},{},{}",
                outcome.name,
                snapshot.month,
                snapshot.cash,
                snapshot.loan_balance,
                snapshot.under_construction,
                snapshot.houses_completed,
            )
            .unwrap();
        }
    }

    println!("\nCombined monthly series written to: {}", output_path);
    println!("\nTotal time: {:?}", start.elapsed());
}
