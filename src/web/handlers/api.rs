//! REST API handlers
//!
//! HTTP endpoints for the inventory snapshot and service health.

use axum::extract::{Query, State};
use axum::response::Json;
use chrono::Utc;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::core::{ScenarioName, estimator};
use crate::state::AppState;
use crate::types::{InventoryResponse, SYNTHETIC_NOTE};

const DEFAULT_SCENARIO: &str = "small";

#[derive(Debug, Deserialize)]
pub struct InventoryParams {
    pub scenario: Option<String>,
}

/// Inventory snapshot endpoint - `GET /inventory?scenario=<name>`
///
/// Total over all inputs: unknown scenario names are normalized to `small`
/// rather than rejected, and nothing else can fail.
pub async fn get_inventory(
    State(state): State<AppState>,
    Query(params): Query<InventoryParams>,
) -> Json<InventoryResponse> {
    let requested = params.scenario.as_deref().unwrap_or(DEFAULT_SCENARIO);
    let name = ScenarioName::resolve(requested);
    if requested != name.as_str() {
        debug!(requested, fallback = name.as_str(), "unknown scenario name, using fallback");
    }

    let scenario = state.catalog.get(name);
    let mut rng = rand::thread_rng();
    let costs = estimator::jitter_costs(&scenario.base_costs, &mut rng);
    let recommendations = estimator::build_recommendations(&state.catalog, &costs);

    info!(
        scenario = name.as_str(),
        services = costs.len(),
        recommendations = recommendations.len(),
        "served inventory snapshot"
    );

    Json(InventoryResponse {
        ec2_instances: scenario.ec2_instances,
        rds_instances: scenario.rds_instances,
        s3_buckets: scenario.s3_buckets,
        costs,
        recommendations,
        scenario: name.as_str().to_string(),
        note: SYNTHETIC_NOTE.to_string(),
    })
}

/// Health check endpoint - `GET /health`
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "uptime_seconds": state.uptime_seconds(),
        "server_time": Utc::now().timestamp(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
