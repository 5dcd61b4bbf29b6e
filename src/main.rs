//! Homebuilding Simulator CLI
//!
//! Command-line interface for running a single simulation

use anyhow::Context;
use chrono::{Local, NaiveDate};
use clap::Parser;
use std::fs::File;

use homebuilding_simulator::params::{
    DEFAULT_CONSTRUCTION_COST_PER_SQFT, DEFAULT_CONSTRUCTION_MONTHS, DEFAULT_HOUSE_SQFT,
    DEFAULT_INITIAL_LOAN, DEFAULT_MAX_SIMULTANEOUS_BUILDS, DEFAULT_SELLING_PRICE_PER_SQFT,
    DEFAULT_SIMULATION_MONTHS,
};
use homebuilding_simulator::{report, SimulationEngine, SimulationParameters};

#[derive(Parser, Debug)]
#[command(name = "homebuilding_simulator")]
#[command(about = "Simulate monthly cash flow for a spec homebuilding business")]
struct Args {
    /// Initial loan, arriving as opening cash and owed in full
    #[arg(long, default_value_t = DEFAULT_INITIAL_LOAN)]
    initial_loan: f64,

    /// Construction cost per square foot
    #[arg(long, default_value_t = DEFAULT_CONSTRUCTION_COST_PER_SQFT)]
    cost_per_sqft: f64,

    /// Selling price per square foot
    #[arg(long, default_value_t = DEFAULT_SELLING_PRICE_PER_SQFT)]
    price_per_sqft: f64,

    /// House size in square feet
    #[arg(long, default_value_t = DEFAULT_HOUSE_SQFT)]
    house_sqft: f64,

    /// Months to build one house
    #[arg(long, default_value_t = DEFAULT_CONSTRUCTION_MONTHS)]
    construction_months: u32,

    /// Number of months to simulate
    #[arg(long, default_value_t = DEFAULT_SIMULATION_MONTHS)]
    simulation_months: u32,

    /// Maximum houses under construction at once
    #[arg(long, default_value_t = DEFAULT_MAX_SIMULTANEOUS_BUILDS)]
    max_builds: u32,

    /// First simulated month as YYYY-MM (defaults to the current date)
    #[arg(long)]
    start_month: Option<String>,

    /// Output CSV path
    #[arg(short, long, default_value = "simulation_output.csv")]
    output: String,

    /// Console table rows before truncation
    #[arg(long, default_value_t = 24)]
    table_months: usize,
}

/// Parse a YYYY-MM month into the first day of that month
fn parse_start_month(value: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d")
        .with_context(|| format!("invalid start month '{}', expected YYYY-MM", value))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    println!("Homebuilding Simulator v0.1.0");
    println!("=============================\n");

    let params = SimulationParameters {
        initial_loan: args.initial_loan,
        construction_cost_per_sqft: args.cost_per_sqft,
        selling_price_per_sqft: args.price_per_sqft,
        house_sqft: args.house_sqft,
        construction_months: args.construction_months,
        simulation_months: args.simulation_months,
        max_simultaneous_builds: args.max_builds,
    };
    params.validate()?;

    let start = match &args.start_month {
        Some(value) => parse_start_month(value)?,
        None => Local::now().date_naive(),
    };

    let engine = SimulationEngine::new(params.clone());
    let economics = engine.economics();

    println!("Parameters:");
    println!("  Initial Loan: ${:.2}", params.initial_loan);
    println!("  House Size: {:.0} sq ft", params.house_sqft);
    println!(
        "  Construction Cost: ${:.2}/sq ft (${:.2}/house)",
        params.construction_cost_per_sqft, economics.construction_cost
    );
    println!(
        "  Selling Price: ${:.2}/sq ft (${:.2}/house)",
        params.selling_price_per_sqft, economics.selling_price
    );
    println!("  Profit per House: ${:.2}", economics.profit_per_house);
    println!("  Construction Time: {} months", params.construction_months);
    println!("  Max Simultaneous Builds: {}", params.max_simultaneous_builds);
    println!();

    let result = engine.run();

    println!("Simulation Results ({} months):", result.monthly.len());
    report::print_monthly_table(&result, start, args.table_months);

    let file = File::create(&args.output)
        .with_context(|| format!("unable to create {}", args.output))?;
    report::write_monthly_csv(file, &result, start)
        .with_context(|| format!("unable to write {}", args.output))?;
    println!("\nFull results written to: {}", args.output);

    println!();
    report::print_summary(&result.summary());

    // Sale months for quick cycle inspection
    println!("\nSale Months:");
    let mut previous = 0;
    for snapshot in &result.monthly {
        if snapshot.houses_completed > previous {
            println!(
                "  Month {:>3}: +{} sold  Cash=${:.2}  Loan=${:.2}",
                snapshot.month,
                snapshot.houses_completed - previous,
                snapshot.cash,
                snapshot.loan_balance
            );
            previous = snapshot.houses_completed;
        }
    }

    Ok(())
}
