//! In-memory player roster.
//!
//! Every operation takes the same lock, so list/get/count/add/delete are each
//! a single atomic step over the collection. Reads hand out owned copies.

use std::sync::{Mutex, MutexGuard};
use thiserror::Error;
use crate::models::{Player, PlayerAdded, PlayerDeleted, SortStrategy, TeamCount};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RosterError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    Internal(String),
}

pub struct Roster {
    players: Mutex<Vec<Player>>,
}

impl Roster {
    pub fn new(players: Vec<Player>) -> Self {
        Self {
            players: Mutex::new(players),
        }
    }

    /// Roster pre-populated with the seven starting players
    pub fn seeded() -> Self {
        Self::new(seed_players())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Player>>, RosterError> {
        self.players
            .lock()
            .map_err(|_| RosterError::Internal("Roster lock poisoned".to_string()))
    }

    /// List every player, optionally sorted by points per game.
    ///
    /// `sort_code` is the raw wire value: absent, `1` or `-1`. Sorting is
    /// stable, so tied players keep their insertion order in both directions.
    pub fn list_players(&self, sort_code: Option<i64>) -> Result<Vec<Player>, RosterError> {
        let strategy = sort_code.map(SortStrategy::try_from).transpose()?;
        let mut players = self.lock()?.clone();

        match strategy {
            None => {}
            Some(SortStrategy::Ascending) => {
                players.sort_by(|a, b| a.points_per_game.total_cmp(&b.points_per_game));
            }
            Some(SortStrategy::Descending) => {
                players.sort_by(|a, b| b.points_per_game.total_cmp(&a.points_per_game));
            }
        }

        Ok(players)
    }

    pub fn get_player(&self, id: i64) -> Result<Player, RosterError> {
        check_not_negative(id)?;

        self.lock()?
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Count players on `team_name`, ignoring case. The caller's spelling is
    /// echoed back untouched.
    pub fn count_by_team(&self, team_name: &str) -> Result<TeamCount, RosterError> {
        if team_name.trim().is_empty() {
            return Err(RosterError::InvalidArgument(
                "Team name is required".to_string(),
            ));
        }

        let players_count = self
            .lock()?
            .iter()
            .filter(|p| eq_ignore_case(&p.team, team_name))
            .count();

        Ok(TeamCount {
            team: team_name.to_string(),
            players_count,
        })
    }

    pub fn add_player(&self, candidate: Option<Player>) -> Result<PlayerAdded, RosterError> {
        let candidate = candidate.ok_or_else(|| {
            RosterError::InvalidArgument("Player data is required".to_string())
        })?;

        if candidate.id <= 0 {
            return Err(RosterError::InvalidArgument(
                "Player id must be positive".to_string(),
            ));
        }

        let mut players = self.lock()?;
        if players.iter().any(|p| p.id == candidate.id) {
            return Err(RosterError::Conflict(format!(
                "Player #{} already exists",
                candidate.id
            )));
        }

        players.push(candidate.clone());
        tracing::info!(player_id = candidate.id, total = players.len(), "Player added");

        Ok(PlayerAdded {
            message: "Player added!".to_string(),
            player: candidate,
        })
    }

    /// Poison the lock, as a panic while holding it would.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let _ = std::panic::catch_unwind::<_, ()>(std::panic::AssertUnwindSafe(|| {
            let _guard = self.players.lock();
            panic!("roster poisoned");
        }));
    }

    pub fn delete_player(&self, id: i64) -> Result<PlayerDeleted, RosterError> {
        check_not_negative(id)?;

        let mut players = self.lock()?;
        let index = players
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| not_found(id))?;

        let removed = players.remove(index);
        tracing::info!(player_id = id, total = players.len(), "Player deleted");

        Ok(PlayerDeleted {
            message: format!("Player {} deleted", removed.name),
            deleted_player: removed,
        })
    }
}

fn check_not_negative(id: i64) -> Result<(), RosterError> {
    if id < 0 {
        return Err(RosterError::InvalidArgument(
            "Player id cannot be negative".to_string(),
        ));
    }
    Ok(())
}

fn not_found(id: i64) -> RosterError {
    RosterError::NotFound(format!("Player #{} not found", id))
}

// Ordinal, locale-independent comparison. Each char maps to exactly one
// char, so expanding mappings like `ß` -> `SS` never apply.
fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars().map(simple_uppercase).eq(b.chars().map(simple_uppercase))
}

fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

pub fn seed_players() -> Vec<Player> {
    vec![
        Player::new(10, "Tetsuya Kuroko", "PG", 168, "Seirin High", 5.8),
        Player::new(11, "Taiga Kagami", "PF", 190, "Seirin High", 22.5),
        Player::new(4, "Ryota Kise", "SG", 189, "Kaijo High", 26.4),
        Player::new(5, "Shintaro Midorima", "SG", 195, "Shutoku High", 29.2),
        Player::new(6, "Atsushi Murasakibara", "C", 208, "Yosen High", 28.1),
        Player::new(7, "Daiki Aomine", "SF", 192, "Tōō Academy", 31.5),
        Player::new(9, "Seijuro Akashi", "PG", 173, "Rakuzan High", 25.8),
    ]
}
