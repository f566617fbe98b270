use serde::{Serialize, Deserialize};
use crate::roster::RosterError;

/// A single athlete on the roster
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub position: String,
    /// Height in centimeters
    pub height: i32,
    pub team: String,
    pub points_per_game: f64,
}

impl Player {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        position: impl Into<String>,
        height: i32,
        team: impl Into<String>,
        points_per_game: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
            height,
            team: team.into(),
            points_per_game,
        }
    }
}

/// Ordering applied to a player listing, keyed on points per game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortStrategy {
    Ascending,
    Descending,
}

impl TryFrom<i64> for SortStrategy {
    type Error = RosterError;

    /// Only the exact wire codes `1` and `-1` are accepted.
    fn try_from(code: i64) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(SortStrategy::Ascending),
            -1 => Ok(SortStrategy::Descending),
            _ => Err(RosterError::InvalidArgument(
                "Invalid sortStrategy value".to_string(),
            )),
        }
    }
}

/// Response for the team count endpoint
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TeamCount {
    pub team: String,
    pub players_count: usize,
}

/// Response returned after a player is inserted
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerAdded {
    pub message: String,
    pub player: Player,
}

/// Response returned after a player is removed
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDeleted {
    pub message: String,
    pub deleted_player: Player,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_strategy_accepts_only_exact_codes() {
        assert_eq!(SortStrategy::try_from(1).unwrap(), SortStrategy::Ascending);
        assert_eq!(SortStrategy::try_from(-1).unwrap(), SortStrategy::Descending);

        for code in [0, 2, -2, 100, i64::MIN, i64::MAX] {
            assert!(matches!(
                SortStrategy::try_from(code),
                Err(RosterError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn player_uses_camel_case_fields() {
        let player = Player::new(7, "Daiki Aomine", "SF", 192, "Tōō Academy", 31.5);
        let value = serde_json::to_value(&player).unwrap();

        assert_eq!(value["pointsPerGame"], 31.5);
        assert_eq!(value["team"], "Tōō Academy");
        assert!(value.get("points_per_game").is_none());

        let back: Player = serde_json::from_value(value).unwrap();
        assert_eq!(back, player);
    }

    #[test]
    fn player_requires_every_field() {
        let missing_team = serde_json::json!({
            "id": 1,
            "name": "Test",
            "position": "C",
            "height": 200,
            "pointsPerGame": 10.0
        });
        assert!(serde_json::from_value::<Player>(missing_team).is_err());
    }

    #[test]
    fn deleted_response_renames_player_field() {
        let body = PlayerDeleted {
            message: "Player Test deleted".to_string(),
            deleted_player: Player::new(99, "Test", "C", 200, "X", 10.0),
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["deletedPlayer"]["id"], 99);
    }
}
