use tracing::{debug, error, info};

use super::models::{evaluate_outcome, Board, Outcome, Player, CELL_COUNT};
use super::scores::Scores;
use crate::storage::KeyValueStore;

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    OutOfBounds,
    CellTaken,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    Placed {
        player: Player,
        cell: usize,
        outcome: Option<Outcome>,
    },
    Rejected(Rejection),
}

/// Owns one local game plus the score counters that outlive it.
///
/// Invalid input (taken cell, move after the game is decided, undo with no
/// history) is ignored. Scores are written to the store right after they
/// change.
#[derive(Debug)]
pub struct GameController<S> {
    board: Board,
    current_turn: Player,
    outcome: Option<Outcome>,
    history: Vec<Board>,
    scores: Scores,
    store: S,
}

impl<S: KeyValueStore> GameController<S> {
    pub fn new(store: S) -> Self {
        let scores = Scores::load(&store);
        info!(
            "New game. Scores so far: X {}, O {}, draws {}",
            scores.x, scores.o, scores.draws
        );

        Self {
            board: Board::new(),
            current_turn: Player::X,
            outcome: None,
            history: Vec::new(),
            scores,
            store,
        }
    }

    pub fn apply_move(&mut self, cell: usize) -> MoveResult {
        if self.outcome.is_some() {
            debug!("Move rejected: Game is already over.");
            return MoveResult::Rejected(Rejection::GameOver);
        }
        if cell >= CELL_COUNT {
            debug!("Move rejected: Cell {} out of bounds.", cell);
            return MoveResult::Rejected(Rejection::OutOfBounds);
        }
        if !self.board.is_empty_cell(cell) {
            debug!("Move rejected: Cell {} already taken.", cell);
            return MoveResult::Rejected(Rejection::CellTaken);
        }

        let player = self.current_turn;
        self.history.push(self.board);
        self.board.set(cell, player);
        self.current_turn = player.other();
        debug!("{} played cell {}.", player, cell);

        let outcome = evaluate_outcome(&self.board);
        if let Some(outcome) = outcome {
            self.outcome = Some(outcome);
            self.scores.record(outcome);
            info!("Game over: {:?}. Scores: {:?}", outcome, self.scores);
            self.persist_scores();
        }

        MoveResult::Placed {
            player,
            cell,
            outcome,
        }
    }

    /// Steps back one move. Returns `false` when there is nothing to undo.
    ///
    /// A decision reverted this way keeps its score; only `apply_move`
    /// touches the counters.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            debug!("Undo ignored: no history.");
            return false;
        };

        self.board = previous;
        self.outcome = None;
        self.current_turn = self.current_turn.other();
        debug!(
            "Undid last move. {} to play, {} snapshot(s) left.",
            self.current_turn,
            self.history.len()
        );
        true
    }

    pub fn reset(&mut self) {
        self.board = Board::new();
        self.outcome = None;
        self.history.clear();
        self.current_turn = Player::X;

        info!("Game reset. Scores: {:?}", self.scores);
    }

    fn persist_scores(&mut self) {
        if let Err(e) = self.scores.save(&mut self.store) {
            error!("Failed to save scores: {}", e);
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn is_decided(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.outcome {
            Some(Outcome::Win(_)) => self.board.winning_line(),
            _ => None,
        }
    }

    pub fn status_text(&self) -> String {
        match self.outcome {
            Some(Outcome::Win(player)) => format!("{} wins!", player),
            Some(Outcome::Draw) => "It's a draw!".to_string(),
            None => format!("{}'s turn", self.current_turn),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
