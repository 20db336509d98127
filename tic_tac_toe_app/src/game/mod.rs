pub mod controller;
pub mod models;
pub mod scores;

pub use controller::{GameController, MoveResult, Rejection};
pub use models::{evaluate_outcome, Board, Outcome, Player, CELL_COUNT, WINNING_LINES};
pub use scores::{Scores, SCORES_KEY};
