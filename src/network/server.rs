//! HTTP Server
//!
//! axum router and handlers. Decodes requests, calls the game session,
//! and maps each core error kind to a distinct client-facing response.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, info};

use crate::game::player::Move;
use crate::game::session::{GameSession, JoinError, TurnError};
use crate::network::protocol::{ErrorResponse, HealthResponse, JoinResponse, TurnRequest};

/// Shared application state.
pub struct AppState {
    /// The one game session this process serves.
    pub game: GameSession,
}

/// Transport-level error wrapper around core error kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// A join attempt was rejected.
    #[error(transparent)]
    Join(#[from] JoinError),

    /// A move submission was rejected.
    #[error(transparent)]
    Turn(#[from] TurnError),
}

impl ApiError {
    /// Status and message for the client. Capacity rejections are
    /// transient, so they get a "come back later" wording rather than a
    /// permanent refusal.
    fn status_and_message(self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Join(JoinError::CapacityExceeded) => (
                StatusCode::FORBIDDEN,
                "Too many players. Try again later.",
            ),
            ApiError::Turn(TurnError::NoSuchPlayer) => (
                StatusCode::NOT_FOUND,
                "Player with this pid doesn't exist in game.",
            ),
            ApiError::Turn(TurnError::WrongTurn) => {
                (StatusCode::BAD_REQUEST, "Another team's turn. Please, wait.")
            }
            ApiError::Turn(TurnError::OutOfBounds) => {
                (StatusCode::BAD_REQUEST, "No such square on the board.")
            }
            ApiError::Turn(TurnError::CellTaken) => (
                StatusCode::BAD_REQUEST,
                "This square has already been taken.",
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = self.status_and_message();
        (
            status,
            Json(ErrorResponse {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}

/// Create the HTTP router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/join", post(join))
        .route("/api/turn", post(turn))
        .with_state(state)
}

/// Liveness check, independent of game state.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Register a new player and hand back its id and team.
async fn join(State(state): State<Arc<AppState>>) -> Result<Json<JoinResponse>, ApiError> {
    let player = state.game.join().await?;
    info!(player = %player.id, team = ?player.team, "player joined");
    Ok(Json(JoinResponse::from(&player)))
}

/// Submit a move for a player.
async fn turn(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TurnRequest>,
) -> Result<StatusCode, ApiError> {
    debug!(pid = %body.pid, row = body.row, col = body.col, "turn request");
    state
        .game
        .turn(
            body.pid,
            Move {
                row: body.row,
                col: body.col,
            },
        )
        .await?;
    Ok(StatusCode::OK)
}
