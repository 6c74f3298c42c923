use axum::{Json, http::StatusCode, response::IntoResponse};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::{debug, info};

#[derive(Debug, Serialize)]
pub struct PingResponse {
    pub ok: bool,
    pub time: String,
}

pub async fn not_found() -> impl IntoResponse {
    info!("router: not_found handler invoked");
    (StatusCode::NOT_FOUND, "NOT_FOUND").into_response()
}

/// Liveness only; never touches the database.
pub async fn ping() -> impl IntoResponse {
    debug!("router: ping handler invoked");
    Json(PingResponse {
        ok: true,
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
