//! AWS Lambda handler for running homebuilding simulations
//!
//! Accepts simulation parameters via JSON and returns the monthly series
//! along with summary metrics, ready for a charting front end.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use homebuilding_simulator::params::{
    DEFAULT_CONSTRUCTION_COST_PER_SQFT, DEFAULT_CONSTRUCTION_MONTHS, DEFAULT_HOUSE_SQFT,
    DEFAULT_INITIAL_LOAN, DEFAULT_MAX_SIMULTANEOUS_BUILDS, DEFAULT_SELLING_PRICE_PER_SQFT,
    DEFAULT_SIMULATION_MONTHS,
};
use homebuilding_simulator::{
    MonthlySnapshot, SimulationEngine, SimulationParameters, SimulationSummary,
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

/// Input parameters for one simulation, all optional with the interactive
/// defaults
#[derive(Debug, Deserialize)]
pub struct SimulationRequest {
    /// Initial loan, arriving as opening cash (default: 320k)
    #[serde(default = "default_initial_loan")]
    pub initial_loan: f64,

    /// Construction cost per square foot (default: 175)
    #[serde(default = "default_cost_per_sqft")]
    pub construction_cost_per_sqft: f64,

    /// Selling price per square foot (default: 250)
    #[serde(default = "default_price_per_sqft")]
    pub selling_price_per_sqft: f64,

    /// House size in square feet (default: 2000)
    #[serde(default = "default_house_sqft")]
    pub house_sqft: f64,

    /// Months to build one house (default: 5)
    #[serde(default = "default_construction_months")]
    pub construction_months: u32,

    /// Number of months to simulate (default: 24)
    #[serde(default = "default_simulation_months")]
    pub simulation_months: u32,

    /// Maximum houses under construction at once (default: 1)
    #[serde(default = "default_max_builds")]
    pub max_simultaneous_builds: u32,
}

fn default_initial_loan() -> f64 { DEFAULT_INITIAL_LOAN }
fn default_cost_per_sqft() -> f64 { DEFAULT_CONSTRUCTION_COST_PER_SQFT }
fn default_price_per_sqft() -> f64 { DEFAULT_SELLING_PRICE_PER_SQFT }
fn default_house_sqft() -> f64 { DEFAULT_HOUSE_SQFT }
fn default_construction_months() -> u32 { DEFAULT_CONSTRUCTION_MONTHS }
fn default_simulation_months() -> u32 { DEFAULT_SIMULATION_MONTHS }
fn default_max_builds() -> u32 { DEFAULT_MAX_SIMULTANEOUS_BUILDS }

impl SimulationRequest {
    fn into_params(self) -> SimulationParameters {
        SimulationParameters {
            initial_loan: self.initial_loan,
            construction_cost_per_sqft: self.construction_cost_per_sqft,
            selling_price_per_sqft: self.selling_price_per_sqft,
            house_sqft: self.house_sqft,
            construction_months: self.construction_months,
            simulation_months: self.simulation_months,
            max_simultaneous_builds: self.max_simultaneous_builds,
        }
    }
}

/// Output from one simulation
#[derive(Debug, Serialize)]
pub struct SimulationResponse {
    pub parameters: SimulationParameters,
    pub summary: SimulationSummary,
    pub monthly: Vec<MonthlySnapshot>,
    pub execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    let body = serde_json::json!({ "error": message }).to_string();
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body))
        .unwrap()
}

fn json_response(body: &SimulationResponse) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    // Parse request body
    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: SimulationRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let params = request.into_params();
    if let Err(e) = params.validate() {
        return Ok(error_response(400, &e.to_string()));
    }

    let engine = SimulationEngine::new(params.clone());
    let result = engine.run();
    let summary = result.summary();

    let execution_time_ms = start.elapsed().as_millis() as u64;

    let response = SimulationResponse {
        parameters: params,
        summary,
        monthly: result.monthly,
        execution_time_ms,
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_uses_defaults() {
        let request: SimulationRequest = serde_json::from_str("{}").unwrap();
        let params = request.into_params();

        assert_eq!(params, SimulationParameters::default());
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_partial_request_overrides_named_fields() {
        let request: SimulationRequest =
            serde_json::from_str(r#"{"max_simultaneous_builds": 3, "simulation_months": 60}"#)
                .unwrap();
        let params = request.into_params();

        assert_eq!(params.max_simultaneous_builds, 3);
        assert_eq!(params.simulation_months, 60);
        assert_eq!(params.initial_loan, DEFAULT_INITIAL_LOAN);
    }

    #[test]
    fn test_out_of_range_request_fails_validation() {
        let request: SimulationRequest =
            serde_json::from_str(r#"{"simulation_months": 500}"#).unwrap();

        assert!(request.into_params().validate().is_err());
    }
}
