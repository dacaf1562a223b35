use std::io::Write;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::game::{
    winning_run, Board, BoardError, GameOutcome, GameState, MoveError, Phase, HEIGHT, WIDTH,
};

use super::input::{Command, MoveInput};
use super::render::render_board;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Finished(GameOutcome),
    Quit,
}

/// Turn controller: owns the game state and drives one game from the first
/// prompt to a win, draw or quit.
pub struct App<I, W> {
    game_state: GameState,
    input: I,
    out: W,
    config: AppConfig,
}

impl<I: MoveInput, W: Write> App<I, W> {
    pub fn new(config: AppConfig, input: I, out: W) -> Result<Self, AppError> {
        config.validate()?;
        let board = Board::new(WIDTH, HEIGHT)?;
        Ok(App {
            game_state: GameState::with_first_player(board, config.game.first_player),
            input,
            out,
            config,
        })
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Main game loop
    pub fn run(&mut self) -> Result<SessionEnd, AppError> {
        if self.config.game.show_intro {
            self.print_intro()?;
        }
        tracing::info!(first_player = %self.config.game.first_player, "game started");

        loop {
            self.draw_board()?;

            let player = match self.game_state.phase() {
                Phase::AwaitingMove(player) => player,
                Phase::Won(player) => {
                    let glyph = self.config.display.player_glyph(player);
                    writeln!(self.out, "Player {} has won!", glyph)?;
                    return Ok(SessionEnd::Finished(GameOutcome::Winner(player)));
                }
                Phase::Draw => {
                    writeln!(self.out, "There is a tie!")?;
                    return Ok(SessionEnd::Finished(GameOutcome::Draw));
                }
            };

            let command =
                self.input
                    .next_command(player, self.game_state.board(), &mut self.out)?;
            match command {
                Command::Quit => {
                    tracing::info!(player = %player, "player quit");
                    writeln!(self.out, "Thanks for playing!")?;
                    return Ok(SessionEnd::Quit);
                }
                Command::Drop(column) => self.drop_tile(column)?,
            }
        }
    }

    /// Apply the current player's drop. A full column is reported and the
    /// same player moves again.
    fn drop_tile(&mut self, column: usize) -> Result<(), AppError> {
        match self.game_state.apply_move_mut(column) {
            Ok(placement) => {
                tracing::debug!(
                    player = %placement.player,
                    column = placement.column,
                    row = placement.row,
                    "tile placed"
                );
                if let Phase::Won(player) = self.game_state.phase() {
                    let run = winning_run(self.game_state.board(), player);
                    tracing::info!(player = %player, run = ?run, "game won");
                } else if self.game_state.phase() == Phase::Draw {
                    tracing::info!("game drawn");
                }
                Ok(())
            }
            Err(MoveError::Board(BoardError::ColumnFull(column))) => {
                tracing::warn!(column, "drop into full column");
                writeln!(self.out, "Column {} is full, choose another.", column + 1)?;
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }

    fn draw_board(&mut self) -> Result<(), AppError> {
        let text = render_board(self.game_state.board(), &self.config.display);
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    fn print_intro(&mut self) -> Result<(), AppError> {
        writeln!(
            self.out,
            "FOUR IN A ROW\n\n\
             Two players take turns dropping tiles into one of {} columns, trying\n\
             to make four in a row horizontally, vertically, or diagonally.",
            self.game_state.board().width()
        )?;
        Ok(())
    }
}
