//! Two-player tic-tac-toe on one screen, with undo, reset and scores that
//! persist between sessions.

pub mod config;
pub mod game;
pub mod game_app;
pub mod storage;
