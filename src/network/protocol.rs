//! Protocol Messages
//!
//! Wire format for the HTTP API. All bodies are JSON. The game core owns
//! none of these shapes; teams travel as their numeric value and player
//! ids as UUID strings.

use serde::{Deserialize, Serialize};

use crate::game::player::{Player, PlayerId};

/// Response body for `POST /api/join`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinResponse {
    /// Player identifier to present on subsequent turns.
    pub uid: String,
    /// Assigned team (noughts = 0, crosses = 1).
    pub team: u8,
}

impl From<&Player> for JoinResponse {
    fn from(player: &Player) -> Self {
        Self {
            uid: player.id.to_string(),
            team: player.team.as_u8(),
        }
    }
}

/// Request body for `POST /api/turn`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TurnRequest {
    /// Identifier issued at join time.
    pub pid: PlayerId,
    /// Zero-based row index.
    pub row: i64,
    /// Zero-based column index.
    pub col: i64,
}

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status string, always "ok".
    pub status: String,
}

/// Error body returned for every failed request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure description.
    pub error: String,
}
