use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use super::SharedRoster;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    status: String,
    players_count: Option<usize>,
    timestamp: i64,
}

// GET /health - Liveness plus a roster sanity check
pub async fn health_check(State(roster): State<SharedRoster>) -> (StatusCode, Json<HealthResponse>) {
    let (status, players_count) = match roster.list_players(None) {
        Ok(players) => (StatusCode::OK, Some(players.len())),
        Err(err) => {
            tracing::error!(error = %err, "Roster unavailable");
            (StatusCode::SERVICE_UNAVAILABLE, None)
        }
    };

    let response = HealthResponse {
        status: if status.is_success() { "ok" } else { "degraded" }.to_string(),
        players_count,
        timestamp: chrono::Utc::now().timestamp(),
    };

    (status, Json(response))
}
