//! Scenario file loading from CSV

use csv::Reader;
use std::error::Error;
use std::io::Read;
use std::path::Path;

use super::{Scenario, SimulationParameters};

/// Default scenario file shipped with the repository
pub const DEFAULT_SCENARIOS_PATH: &str = "data/scenarios.csv";

/// Raw CSV record matching the scenario file column headers
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "InitialLoan")]
    initial_loan: f64,
    #[serde(rename = "ConstructionCostPerSqFt")]
    construction_cost_per_sqft: f64,
    #[serde(rename = "SellingPricePerSqFt")]
    selling_price_per_sqft: f64,
    #[serde(rename = "HouseSqFt")]
    house_sqft: f64,
    #[serde(rename = "ConstructionMonths")]
    construction_months: u32,
    #[serde(rename = "SimulationMonths")]
    simulation_months: u32,
    #[serde(rename = "MaxSimultaneousBuilds")]
    max_simultaneous_builds: u32,
}

impl CsvRow {
    fn into_scenario(self) -> Result<Scenario, Box<dyn Error>> {
        let params = SimulationParameters {
            initial_loan: self.initial_loan,
            construction_cost_per_sqft: self.construction_cost_per_sqft,
            selling_price_per_sqft: self.selling_price_per_sqft,
            house_sqft: self.house_sqft,
            construction_months: self.construction_months,
            simulation_months: self.simulation_months,
            max_simultaneous_builds: self.max_simultaneous_builds,
        };

        if let Err(e) = params.validate() {
            return Err(format!("scenario '{}': {}", self.name, e).into());
        }

        Ok(Scenario {
            name: self.name,
            params,
        })
    }
}

/// Load scenario definitions from a CSV file
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let path = path.as_ref();
    let reader = Reader::from_path(path)?;
    let scenarios = read_scenarios(reader)?;
    log::debug!("loaded {} scenarios from {}", scenarios.len(), path.display());
    Ok(scenarios)
}

/// Load scenario definitions from any reader producing scenario CSV
pub fn load_scenarios_from_reader<R: Read>(reader: R) -> Result<Vec<Scenario>, Box<dyn Error>> {
    read_scenarios(Reader::from_reader(reader))
}

/// Load the scenario file shipped in data/
pub fn load_default_scenarios() -> Result<Vec<Scenario>, Box<dyn Error>> {
    load_scenarios(DEFAULT_SCENARIOS_PATH)
}

fn read_scenarios<R: Read>(mut reader: Reader<R>) -> Result<Vec<Scenario>, Box<dyn Error>> {
    let mut scenarios = Vec::new();
    for record in reader.deserialize() {
        let row: CsvRow = record?;
        scenarios.push(row.into_scenario()?);
    }
    Ok(scenarios)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Name,InitialLoan,ConstructionCostPerSqFt,SellingPricePerSqFt,HouseSqFt,ConstructionMonths,SimulationMonths,MaxSimultaneousBuilds
baseline,320000,175,250,2000,5,24,1
two_crews,320000,175,250,2000,5,24,2
";

    #[test]
    fn test_load_from_reader() {
        let scenarios = load_scenarios_from_reader(SAMPLE.as_bytes()).unwrap();

        assert_eq!(scenarios.len(), 2);
        assert_eq!(scenarios[0].name, "baseline");
        assert_eq!(scenarios[0].params.initial_loan, 320_000.0);
        assert_eq!(scenarios[0].params.construction_months, 5);
        assert_eq!(scenarios[1].name, "two_crews");
        assert_eq!(scenarios[1].params.max_simultaneous_builds, 2);
    }

    #[test]
    fn test_invalid_row_names_scenario_and_field() {
        let csv = "\
Name,InitialLoan,ConstructionCostPerSqFt,SellingPricePerSqFt,HouseSqFt,ConstructionMonths,SimulationMonths,MaxSimultaneousBuilds
broken,320000,175,250,2000,0,24,1
";
        let err = load_scenarios_from_reader(csv.as_bytes()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("broken"));
        assert!(message.contains("construction_months"));
    }

    #[test]
    fn test_malformed_number_rejected() {
        let csv = "\
Name,InitialLoan,ConstructionCostPerSqFt,SellingPricePerSqFt,HouseSqFt,ConstructionMonths,SimulationMonths,MaxSimultaneousBuilds
bad,not_a_number,175,250,2000,5,24,1
";
        assert!(load_scenarios_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_load_default_scenarios() {
        let scenarios = load_default_scenarios().unwrap();

        assert!(!scenarios.is_empty());
        assert_eq!(scenarios[0].name, "baseline");
        for scenario in &scenarios {
            assert!(scenario.params.validate().is_ok());
        }
    }
}
