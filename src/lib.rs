//! # Gridmatch Game Server
//!
//! Turn-based two-team board game on a 100x100 grid.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    GRIDMATCH SERVER                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  game/           - Game logic (single serialized owner)      │
//! │  ├── team.rs     - Two-valued team enum with toggle          │
//! │  ├── board.rs    - Dense occupancy grid                      │
//! │  ├── player.rs   - Player identity and move history          │
//! │  └── session.rs  - Join/turn rules, the only state owner     │
//! │                                                              │
//! │  network/        - Transport (stateless glue)                │
//! │  ├── protocol.rs - Wire types for the HTTP API               │
//! │  └── server.rs   - axum router, status mapping               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Guarantee
//!
//! All mutable state lives inside [`game::session::GameSession`], behind a
//! single async mutex. Every `join`/`turn` call runs its checks and writes as
//! one atomic unit; concurrent callers are linearized and never observe a
//! partially applied operation. The network layer holds no game state.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod game;
pub mod network;

// Re-export commonly used types
pub use game::board::BOARD_SIZE;
pub use game::player::{Move, Player, PlayerId};
pub use game::session::{GameSession, JoinError, SessionConfig, TurnError};
pub use game::team::Team;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
