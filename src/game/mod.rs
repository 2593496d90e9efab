//! Game Logic Module
//!
//! All rules of the match live here. The network layer never touches
//! board or player data directly; it goes through [`session::GameSession`].
//!
//! ## Module Structure
//!
//! - `team`: two-valued team enum and turn alternation
//! - `board`: fixed-size occupancy grid
//! - `player`: player identity and move history
//! - `session`: the single owner of mutable match state

pub mod board;
pub mod player;
pub mod session;
pub mod team;

// Re-export key types
pub use board::{Board, BOARD_SIZE};
pub use player::{Move, Player, PlayerId};
pub use session::{GameSession, JoinError, SessionConfig, TurnError};
pub use team::Team;
