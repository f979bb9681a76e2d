//! JSON handlers for the formula service.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use formula_core::formula::{Bindings, Expression, FormulaConfig, FormulaError};
use formula_core::geometry::{Line, Point};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

// Application State
pub struct AppState {
    pub config: FormulaConfig,
}

/// Engine failure reported to the client
#[derive(Debug)]
pub struct ApiError(pub FormulaError);

impl From<FormulaError> for ApiError {
    fn from(e: FormulaError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        warn!("Rejected request: {}", self.0);
        let body = json!({
            "code": self.0.code(),
            "message": self.0.to_string(),
            "severity": "error"
        });
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct EquationRequest {
    pub equation: String,
    #[serde(default)]
    pub bindings: Bindings,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct EvaluateResponse {
    /// `None` when the result is not finite (JSON has no NaN/inf)
    pub value: Option<f64>,
    pub display: String,
    pub source: String,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct RewriteResponse {
    pub source: String,
}

#[derive(Debug, Deserialize)]
pub struct DistanceRequest {
    pub line: Line,
    pub point: Point,
    /// Measure to the segment instead of the infinite line
    #[serde(default)]
    pub segment: bool,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct DistanceResponse {
    pub distance: Option<f64>,
    pub display: String,
    pub equation: String,
    /// Plugged-in line formula; absent when the segment distance is to an endpoint
    pub plugged: Option<String>,
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

pub async fn root() -> &'static str {
    "Hello from Formula Backend!"
}

pub async fn evaluate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EquationRequest>,
) -> Result<Json<EvaluateResponse>, ApiError> {
    let expr = Expression::with_config(&req.equation, &state.config)?;
    let source = expr.rewrite(&req.bindings)?;
    let value = expr.evaluate(&req.bindings)?;
    info!("Evaluated '{}' -> {}", expr, value);

    Ok(Json(EvaluateResponse {
        value: finite(value),
        display: value.to_string(),
        source,
    }))
}

pub async fn rewrite(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EquationRequest>,
) -> Result<Json<RewriteResponse>, ApiError> {
    let expr = Expression::with_config(&req.equation, &state.config)?;
    let source = expr.rewrite(&req.bindings)?;
    info!("Rewrote '{}' -> '{}'", expr, source);
    Ok(Json(RewriteResponse { source }))
}

pub async fn distance(Json(req): Json<DistanceRequest>) -> Result<Json<DistanceResponse>, ApiError> {
    let DistanceRequest { line, point, segment } = req;

    let distance = if segment {
        line.segment_distance_to_point(&point)?
    } else {
        line.distance_to_point(&point)?
    };
    let equation = line.formula()?.source().to_string();
    let plugged = if segment && !line.projects_onto_segment(&point) {
        None
    } else {
        Some(line.explain_distance(&point)?)
    };
    info!("Distance from {} to line {} is {}", point, equation, distance);

    Ok(Json(DistanceResponse {
        distance: finite(distance),
        display: distance.to_string(),
        equation,
        plugged,
    }))
}
