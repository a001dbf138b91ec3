//! AWS Lambda handler for property investment analysis
//!
//! This Lambda function accepts property, financing, assumption overrides and
//! engine configuration via JSON and returns a tier-shaped analysis report.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use chrono::{DateTime, Utc};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use roi_engine::analysis::{AnalysisConfig, AnalysisEngine};
use roi_engine::assumptions::AssumptionOverrides;
use roi_engine::property::{FinancingInput, PropertyInput};
use roi_engine::report::{assemble, Report, Tier};
use roi_engine::ValidationError;
use serde::{Deserialize, Serialize};

/// Input for one analysis
#[derive(Debug, Deserialize)]
pub struct AnalysisRequest {
    pub property: PropertyInput,
    pub financing: FinancingInput,

    /// Market-assumption overrides, all optional
    #[serde(default)]
    pub assumptions: AssumptionOverrides,

    /// Horizon, exit years and selling costs (defaults applied per field)
    #[serde(default)]
    pub config: AnalysisConfig,

    /// Output tier to shape the report for (default: free)
    #[serde(default = "default_tier")]
    pub tier: Tier,
}

fn default_tier() -> Tier {
    Tier::Free
}

/// Output envelope around the tier-shaped report
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub report: Report,
    pub execution_time_ms: u64,
    pub generated_at: DateTime<Utc>,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(
            serde_json::json!({ "error": message }).to_string(),
        ))
        .unwrap()
}

fn validation_response(error: &ValidationError) -> Response<Body> {
    let body = serde_json::json!({
        "error": error.to_string(),
        "issues": error.issues.clone(),
    });
    Response::builder()
        .status(400)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(body.to_string()))
        .unwrap()
}

fn json_response(body: &AnalysisResponse) -> Response<Body> {
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

    let request: AnalysisRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => {
            return Ok(error_response(400, &format!("Invalid JSON: {}", e)));
        }
    };

    let overrides = if request.assumptions.is_empty() {
        None
    } else {
        Some(&request.assumptions)
    };

    let engine = AnalysisEngine::new(request.config.clone());
    let result = match engine.analyze(&request.property, &request.financing, overrides) {
        Ok(result) => result,
        Err(error) => {
            return Ok(validation_response(&error));
        }
    };

    let response = AnalysisResponse {
        report: assemble(&result, request.tier),
        execution_time_ms: start.elapsed().as_millis() as u64,
        generated_at: Utc::now(),
    };

    Ok(json_response(&response))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
