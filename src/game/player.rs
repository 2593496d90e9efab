//! Player Identity and Move History

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::game::team::Team;

/// Opaque player identifier issued at join time (UUID v4).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    /// Generate a fresh globally-unique identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single cell claim, zero-based coordinates.
///
/// Signed so that out-of-range values coming off the wire reach the
/// bounds check instead of failing at decode time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Zero-based row index.
    pub row: i64,
    /// Zero-based column index.
    pub col: i64,
}

/// A registered player.
#[derive(Clone, Debug)]
pub struct Player {
    /// Identifier handed to the client at join time.
    pub id: PlayerId,
    /// Side assigned at join time, never changes.
    pub team: Team,
    /// Accepted moves in submission order, append-only.
    pub moves: Vec<Move>,
}

impl Player {
    /// Create a freshly joined player with an empty move history.
    pub fn new(id: PlayerId, team: Team) -> Self {
        Self {
            id,
            team,
            moves: Vec::new(),
        }
    }
}
