//! Core game logic: board, player, win detection and the turn state machine
//! with explicit transitions.

mod board;
mod player;
mod state;
mod winner;

pub use board::{Board, BoardError, Cell, HEIGHT, RUN_LENGTH, WIDTH};
pub use player::Player;
pub use state::{GameOutcome, GameResult, GameState, MoveError, Phase, Placement};
pub use winner::{check_winner, winning_run, Run};
