//! Game Session
//!
//! The single owner of mutable match state. Every join and every move
//! runs its checks and writes under one async mutex, so concurrent
//! callers are linearized and never see a half-applied operation.

use tokio::sync::Mutex;
use tracing::debug;

use crate::game::board::{Board, BOARD_SIZE};
use crate::game::player::{Move, Player, PlayerId};
use crate::game::team::Team;

/// Configuration consumed by the session at construction.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum number of players that may join. Zero means nobody can.
    pub players_limit: usize,
    /// Board edge length in cells.
    pub board_size: usize,
    /// Team assigned to the first joiner and allowed to move first.
    pub first_team: Team,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            players_limit: 10,
            board_size: BOARD_SIZE,
            first_team: Team::Crosses,
        }
    }
}

/// Join errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum JoinError {
    /// All player slots are taken right now.
    #[error("No free player slots")]
    CapacityExceeded,
}

/// Move submission errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    /// The submitted player id was never issued by this session.
    #[error("Player not found")]
    NoSuchPlayer,

    /// It is the other team's turn to move.
    #[error("Another team's turn")]
    WrongTurn,

    /// Coordinates outside the board.
    #[error("No such square on the board")]
    OutOfBounds,

    /// The target cell is already occupied.
    #[error("Square already taken")]
    CellTaken,
}

/// Mutable match state. Lives exclusively behind the session mutex;
/// nothing outside this module ever holds a reference to it.
#[derive(Debug)]
struct SessionState {
    players_limit: usize,
    players: Vec<Player>,
    /// Team handed to the next joiner. Flips once per successful join.
    next_player: Team,
    /// Team allowed to move next. Flips once per accepted move,
    /// independently of `next_player`.
    next_turn: Team,
    board: Board,
}

impl SessionState {
    fn new(config: &SessionConfig) -> Self {
        Self {
            players_limit: config.players_limit,
            players: Vec::new(),
            next_player: config.first_team,
            next_turn: config.first_team,
            board: Board::new(config.board_size),
        }
    }

    fn can_join(&self) -> bool {
        self.players.len() < self.players_limit
    }

    fn join(&mut self) -> Result<Player, JoinError> {
        if !self.can_join() {
            return Err(JoinError::CapacityExceeded);
        }

        let player = Player::new(PlayerId::random(), self.next_player);
        self.players.push(player.clone());
        self.next_player = self.next_player.toggle();
        Ok(player)
    }

    fn turn(&mut self, pid: PlayerId, mv: Move) -> Result<(), TurnError> {
        let index = self
            .players
            .iter()
            .position(|p| p.id == pid)
            .ok_or(TurnError::NoSuchPlayer)?;

        let team = self.players[index].team;
        if team != self.next_turn {
            return Err(TurnError::WrongTurn);
        }

        if !self.board.contains(mv.row, mv.col) {
            return Err(TurnError::OutOfBounds);
        }
        let (row, col) = (mv.row as usize, mv.col as usize);

        if self.board.cell(row, col).is_some() {
            return Err(TurnError::CellTaken);
        }

        // All checks passed, apply as one unit.
        self.board.occupy(row, col, team);
        self.players[index].moves.push(mv);
        self.next_turn = self.next_turn.toggle();
        Ok(())
    }
}

/// A running match. All operations are atomic with respect to each other.
pub struct GameSession {
    state: Mutex<SessionState>,
}

impl GameSession {
    /// Create a session with an empty board and no players.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            state: Mutex::new(SessionState::new(&config)),
        }
    }

    /// Whether a join attempt would currently succeed.
    pub async fn can_join(&self) -> bool {
        self.state.lock().await.can_join()
    }

    /// Register a new player.
    ///
    /// Assigns a fresh id and the next team in the join rotation. Fails
    /// with [`JoinError::CapacityExceeded`] when the session is full;
    /// the condition is transient, callers may retry later.
    pub async fn join(&self) -> Result<Player, JoinError> {
        let player = self.state.lock().await.join()?;
        debug!(player = %player.id, team = ?player.team, "player joined");
        Ok(player)
    }

    /// Submit a move for a player.
    ///
    /// Checks run in a fixed order (player exists, turn order, bounds,
    /// occupancy) and the first failure wins; nothing is mutated on any
    /// failure path.
    pub async fn turn(&self, pid: PlayerId, mv: Move) -> Result<(), TurnError> {
        self.state.lock().await.turn(pid, mv)
    }

    /// Number of registered players.
    pub async fn player_count(&self) -> usize {
        self.state.lock().await.players.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    fn state_with_limit(limit: usize) -> SessionState {
        SessionState::new(&SessionConfig {
            players_limit: limit,
            ..Default::default()
        })
    }

    #[test]
    fn joins_alternate_teams_until_full() {
        let mut state = state_with_limit(4);

        let teams: Vec<Team> = (0..4).map(|_| state.join().unwrap().team).collect();
        assert_eq!(
            teams,
            vec![Team::Crosses, Team::Noughts, Team::Crosses, Team::Noughts]
        );

        let mut ids: Vec<PlayerId> = state.players.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);

        assert_eq!(state.join().unwrap_err(), JoinError::CapacityExceeded);
        assert_eq!(state.players.len(), 4);
    }

    #[test]
    fn zero_limit_rejects_first_join() {
        let mut state = state_with_limit(0);
        assert!(!state.can_join());
        assert_eq!(state.join().unwrap_err(), JoinError::CapacityExceeded);
    }

    #[test]
    fn limit_one_admits_only_the_first_team() {
        let mut state = state_with_limit(1);

        let player = state.join().unwrap();
        assert_eq!(player.team, Team::Crosses);

        assert_eq!(state.join().unwrap_err(), JoinError::CapacityExceeded);
    }

    #[test]
    fn full_turn_scenario() {
        let mut state = state_with_limit(2);
        let crosses = state.join().unwrap();
        let noughts = state.join().unwrap();
        assert_eq!(crosses.team, Team::Crosses);
        assert_eq!(noughts.team, Team::Noughts);

        state.turn(crosses.id, Move { row: 0, col: 0 }).unwrap();

        // Same team again before the opponent has moved.
        assert_eq!(
            state.turn(crosses.id, Move { row: 0, col: 1 }).unwrap_err(),
            TurnError::WrongTurn
        );

        // Opponent targets the occupied cell.
        assert_eq!(
            state.turn(noughts.id, Move { row: 0, col: 0 }).unwrap_err(),
            TurnError::CellTaken
        );
        assert_eq!(state.board.cell(0, 0), Some(Team::Crosses));

        // Still the opponent's turn; a free cell works.
        state.turn(noughts.id, Move { row: 1, col: 1 }).unwrap();
        assert_eq!(state.board.cell(1, 1), Some(Team::Noughts));
    }

    #[test]
    fn unknown_player_is_rejected_regardless_of_state() {
        let mut state = state_with_limit(2);
        let stranger = PlayerId::random();

        assert_eq!(
            state.turn(stranger, Move { row: 0, col: 0 }).unwrap_err(),
            TurnError::NoSuchPlayer
        );

        state.join().unwrap();
        assert_eq!(
            state.turn(stranger, Move { row: 0, col: 0 }).unwrap_err(),
            TurnError::NoSuchPlayer
        );
    }

    #[test]
    fn out_of_bounds_is_checked_before_occupancy() {
        let mut state = state_with_limit(2);
        let crosses = state.join().unwrap();

        for mv in [
            Move { row: 100, col: 0 },
            Move { row: 0, col: 100 },
            Move { row: -1, col: 0 },
            Move { row: 0, col: -1 },
        ] {
            assert_eq!(state.turn(crosses.id, mv).unwrap_err(), TurnError::OutOfBounds);
        }

        // Nothing was applied, crosses still to move.
        state.turn(crosses.id, Move { row: 0, col: 0 }).unwrap();
    }

    #[test]
    fn failed_moves_leave_move_history_untouched() {
        let mut state = state_with_limit(2);
        let crosses = state.join().unwrap();
        let noughts = state.join().unwrap();

        state.turn(crosses.id, Move { row: 3, col: 4 }).unwrap();
        let _ = state.turn(noughts.id, Move { row: 3, col: 4 });

        assert_eq!(state.players[0].moves, vec![Move { row: 3, col: 4 }]);
        assert!(state.players[1].moves.is_empty());
    }

    #[test]
    fn join_and_turn_rotations_are_independent() {
        let mut state = state_with_limit(4);
        let crosses = state.join().unwrap();
        let noughts = state.join().unwrap();

        // Two accepted moves flip next_turn twice, back to crosses.
        state.turn(crosses.id, Move { row: 0, col: 0 }).unwrap();
        state.turn(noughts.id, Move { row: 0, col: 1 }).unwrap();

        // The join rotation is unaffected by moves.
        assert_eq!(state.join().unwrap().team, Team::Crosses);
        assert_eq!(state.join().unwrap().team, Team::Noughts);
    }

    #[tokio::test]
    async fn concurrent_joins_fill_the_session_exactly() {
        const LIMIT: usize = 16;
        let session = Arc::new(GameSession::new(SessionConfig {
            players_limit: LIMIT,
            ..Default::default()
        }));

        let handles: Vec<_> = (0..LIMIT)
            .map(|_| {
                let session = Arc::clone(&session);
                tokio::spawn(async move { session.join().await })
            })
            .collect();

        let mut players = Vec::new();
        for handle in handles {
            players.push(handle.await.unwrap().unwrap());
        }

        let mut ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), LIMIT);

        // Whatever order the joins serialized in, teams alternate, so the
        // two sides end up evenly split.
        let crosses = players.iter().filter(|p| p.team == Team::Crosses).count();
        assert_eq!(crosses, LIMIT / 2);

        assert_eq!(session.player_count().await, LIMIT);
        assert!(!session.can_join().await);
        assert_eq!(session.join().await.unwrap_err(), JoinError::CapacityExceeded);
    }
}
