//! # Four in a Row
//!
//! A two-player tile dropping game played in the terminal. Players take
//! turns dropping tiles into a 7x6 grid until one of them gets four in a row
//! horizontally, vertically or diagonally, or the board fills up.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, win detection, state machine
//! - [`ui`]: Text interface: board rendering, move prompt, turn loop
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
