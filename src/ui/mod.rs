//! Text interface: board rendering, line-based move input and the turn loop
//! that ties them to the game state.

mod app;
pub mod input;
pub mod render;

pub use app::{App, SessionEnd};
pub use input::{Command, LineInput, MoveInput};
pub use render::render_board;
