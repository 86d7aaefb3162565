use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{error, info};

use super::domain::ApplicationInput;
use super::{model, ScoringEngine};

/// Static disclaimer served by the metadata endpoints.
pub const PROTOTYPE_WARNING: &str = "PROTOTYPE - SIMULATION ONLY";

/// Fields the request envelope must carry; everything else defaults.
const REQUIRED_FIELDS: [&str; 4] = ["loanId", "userId", "amount", "termWeeks"];

/// Router builder exposing the scoring and model-metadata endpoints.
pub fn scoring_router(engine: Arc<ScoringEngine>) -> Router {
    Router::new()
        .route("/score", post(score_handler))
        .route("/model/info", get(model_info_handler))
        .route("/health", get(health_handler))
        .with_state(engine)
}

pub(crate) async fn score_handler(
    State(engine): State<Arc<ScoringEngine>>,
    Json(payload): Json<Value>,
) -> Response {
    let missing: Vec<&str> = REQUIRED_FIELDS
        .iter()
        .filter(|field| payload.get(**field).map_or(true, Value::is_null))
        .copied()
        .collect();
    if !missing.is_empty() {
        let body = json!({
            "error": format!("missing required fields: {}", missing.join(", ")),
            "missingFields": missing,
        });
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }

    let input: ApplicationInput = match serde_json::from_value(payload) {
        Ok(input) => input,
        Err(err) => {
            let body = json!({ "error": err.to_string() });
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }
    };

    info!(loan_id = %input.loan_id, amount = input.amount, "scoring request");

    match engine.score(&input) {
        Ok(record) => {
            info!(
                loan_id = %input.loan_id,
                decision = record.decision.label(),
                pd = record.pd,
                "scoring complete"
            );
            (StatusCode::OK, Json(record)).into_response()
        }
        Err(err) => {
            error!(loan_id = %input.loan_id, error = %err, "scoring failed");
            let body = json!({
                "error": "internal scoring error",
                "modelVersion": engine.model_version(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

pub(crate) async fn model_info_handler(
    State(engine): State<Arc<ScoringEngine>>,
) -> Json<Value> {
    let thresholds = engine.rule_set().thresholds();
    Json(json!({
        "modelVersion": engine.model_version(),
        "modelType": "Champion Logistic Regression",
        "features": model::FEATURE_NAMES,
        "decisionThresholds": {
            "approve": format!("<= {:.2} PD", thresholds.approve),
            "counter": format!("{:.2} < PD <= {:.2}", thresholds.approve, thresholds.counter),
            "decline": format!("> {:.2} PD", thresholds.counter),
        },
        "warning": PROTOTYPE_WARNING,
    }))
}

pub(crate) async fn health_handler(State(engine): State<Arc<ScoringEngine>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "modelVersion": engine.model_version(),
        "timestamp": Utc::now(),
        "warning": PROTOTYPE_WARNING,
    }))
}
