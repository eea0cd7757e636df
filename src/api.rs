//! JSON-over-HTTP service exposing the projection engine
//!
//! `POST /pension-projection` takes a [`PensionCalculatorInput`] and returns a
//! [`PensionProjectionResult`], rounded for display unless `?precision=full` is given.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Json, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::error::ProjectionError;
use crate::member::PensionCalculatorInput;
use crate::projection::ProjectionEngine;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Currency rounded to whole units, ratio to one decimal
    #[default]
    Display,
    /// Unrounded engine output
    Full,
}

#[derive(Debug, Default, Deserialize)]
pub struct ProjectionQuery {
    #[serde(default)]
    pub precision: Precision,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    tier1_formula: &'static str,
    annuity_formula: &'static str,
}

/// Build the service router around a shared engine
pub fn router(engine: ProjectionEngine) -> Router {
    Router::new()
        .route("/pension-projection", post(projection_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .with_state(Arc::new(engine))
}

/// Bind to `0.0.0.0:port` and serve until the process exits
pub async fn run_http_server(port: u16, engine: ProjectionEngine) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let app = router(engine);

    let listener = TcpListener::bind(addr).await?;
    info!("pension projection API listening on http://{addr}");

    axum::serve(listener, app).await
}

async fn projection_handler(
    State(engine): State<Arc<ProjectionEngine>>,
    query: Result<Query<ProjectionQuery>, QueryRejection>,
    payload: Result<Json<PensionCalculatorInput>, JsonRejection>,
) -> Response {
    let Query(query) = match query {
        Ok(query) => query,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text(), None);
        }
    };
    let Json(input) = match payload {
        Ok(input) => input,
        Err(rejection) => {
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text(), None);
        }
    };

    match engine.project(&input) {
        Ok(result) => {
            debug!("projection served: {} years", result.years());
            match query.precision {
                Precision::Display => json_response(StatusCode::OK, result.rounded()),
                Precision::Full => json_response(StatusCode::OK, result),
            }
        }
        Err(err @ ProjectionError::Validation(_)) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, err.to_string(), err.field())
        }
        Err(err @ (ProjectionError::ZeroFinalSalary(_) | ProjectionError::NonFiniteResult { .. })) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, err.to_string(), None)
        }
    }
}

async fn health_handler(State(engine): State<Arc<ProjectionEngine>>) -> Response {
    json_response(
        StatusCode::OK,
        HealthResponse {
            status: "ok",
            tier1_formula: engine.assumptions().tier1.name(),
            annuity_formula: engine.assumptions().annuity.name(),
        },
    )
}

async fn not_found_handler() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not found".to_string(), None)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    let mut response = (status, Json(body)).into_response();
    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, header::HeaderValue::from_static("no-store"));
    response
}

fn error_response(status: StatusCode, error: String, field: Option<&'static str>) -> Response {
    json_response(status, ErrorResponse { error, field })
}
