use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use serde::Deserialize;
use crate::error::ApiError;
use crate::models::{Player, PlayerDeleted, TeamCount};
use crate::roster::RosterError;
use super::SharedRoster;

// Query parameters for listing players
#[derive(Deserialize)]
pub struct ListPlayersQuery {
    #[serde(default, rename = "sortStrategy")]
    sort_strategy: Option<String>,
}

// An empty `?sortStrategy=` means no sorting, like an omitted one
fn parse_sort_code(raw: Option<&str>) -> Result<Option<i64>, RosterError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            RosterError::InvalidArgument("Invalid sortStrategy value".to_string())
        }),
    }
}

// Query parameters for counting a team's players
#[derive(Deserialize)]
pub struct TeamCountQuery {
    #[serde(default, rename = "teamName")]
    team_name: Option<String>,
}

// GET /players/all?sortStrategy=-1 - List all players
pub async fn get_players(
    State(roster): State<SharedRoster>,
    query: Result<Query<ListPlayersQuery>, QueryRejection>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let Query(params) = query?;
    let sort_code = parse_sort_code(params.sort_strategy.as_deref())?;
    let players = roster.list_players(sort_code)?;

    Ok(Json(players))
}

// GET /players/:id - Get player by id
pub async fn get_player_by_id(
    State(roster): State<SharedRoster>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Player>, ApiError> {
    let Path(player_id) = path?;
    let player = roster.get_player(player_id)?;

    Ok(Json(player))
}

// GET /players/team/count?teamName=Seirin%20High - Count players on a team
pub async fn get_team_count(
    State(roster): State<SharedRoster>,
    query: Result<Query<TeamCountQuery>, QueryRejection>,
) -> Result<Json<TeamCount>, ApiError> {
    let Query(params) = query?;
    // A missing parameter is treated like a blank one
    let team_name = params.team_name.unwrap_or_default();
    let count = roster.count_by_team(&team_name)?;

    Ok(Json(count))
}

// POST /players/add - Insert a new player
pub async fn add_player(
    State(roster): State<SharedRoster>,
    body: Result<Json<Option<Player>>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(candidate) = body?;
    let added = roster.add_player(candidate)?;

    let location = format!("/players/{}", added.player.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(added),
    ))
}

// DELETE /players/:id - Remove a player
pub async fn delete_player(
    State(roster): State<SharedRoster>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<PlayerDeleted>, ApiError> {
    let Path(player_id) = path?;
    let deleted = roster.delete_player(player_id)?;

    Ok(Json(deleted))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_sort_code_means_unsorted() {
        assert_eq!(parse_sort_code(None), Ok(None));
        assert_eq!(parse_sort_code(Some("")), Ok(None));
        assert_eq!(parse_sort_code(Some("  ")), Ok(None));
        assert_eq!(parse_sort_code(Some("-1")), Ok(Some(-1)));
        assert_eq!(parse_sort_code(Some(" 1 ")), Ok(Some(1)));
    }

    #[test]
    fn non_numeric_sort_code_is_invalid() {
        for raw in ["abc", "1.5", "--1"] {
            assert_eq!(
                parse_sort_code(Some(raw)),
                Err(RosterError::InvalidArgument("Invalid sortStrategy value".to_string()))
            );
        }
    }
}
