//! Network Layer
//!
//! HTTP transport for the game session. This layer only decodes requests,
//! calls into `game/`, and maps error kinds to status codes; it never
//! holds game state of its own.

pub mod protocol;
pub mod server;

pub use protocol::{ErrorResponse, HealthResponse, JoinResponse, TurnRequest};
pub use server::{build_router, ApiError, AppState};
