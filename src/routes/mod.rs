//! HTTP front end for the roster.
//!
//! Handlers stay thin: pull values out of the request, call into
//! [`Roster`](crate::roster::Roster), and let [`ApiError`](crate::error::ApiError)
//! pick the status code.

use std::sync::Arc;
use axum::{routing::get, routing::post, Router};
use crate::roster::Roster;

pub mod health;
pub mod players;

pub type SharedRoster = Arc<Roster>;

/// Build the application router around a shared roster.
pub fn router(roster: SharedRoster) -> Router {
    Router::new()
        // Root and health
        .route("/", get(|| async { "Roster API - v1.0" }))
        .route("/health", get(health::health_check))

        // Player endpoints
        .route("/players/all", get(players::get_players))
        .route("/players/team/count", get(players::get_team_count))
        .route("/players/add", post(players::add_player))
        .route(
            "/players/{id}",
            get(players::get_player_by_id).delete(players::delete_player),
        )

        .with_state(roster)
}
