use std::io::{self, BufRead, Write};

use crate::config::{DisplayConfig, InputConfig};
use crate::error::InputError;
use crate::game::{Board, Player};

/// What the acting player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Drop a tile into this 0-based column. Always a column with room.
    Drop(usize),
    Quit,
}

/// Source of player commands for the turn loop.
pub trait MoveInput {
    /// Block until the player gives a valid command. Prompts and
    /// rejection messages go to `out`.
    fn next_command(
        &mut self,
        player: Player,
        board: &Board,
        out: &mut dyn Write,
    ) -> io::Result<Command>;
}

/// Parse a 1-based column label into a 0-based column with room for a tile.
/// `text` is expected to be trimmed already.
pub fn parse_column(text: &str, board: &Board) -> Result<usize, InputError> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
        return Err(InputError::NotANumber(text.to_string()));
    }
    let width = board.width();
    // Only overflow can fail here
    let value: usize = text
        .parse()
        .map_err(|_| InputError::NotANumber(text.to_string()))?;
    if value < 1 || value > width {
        return Err(InputError::OutOfRange { value, width });
    }

    let column = value - 1;
    if board.is_column_full(column) {
        return Err(InputError::ColumnFull(value));
    }
    Ok(column)
}

/// Line-oriented prompt over any buffered reader (stdin in the binary).
pub struct LineInput<R> {
    reader: R,
    quit_keyword: String,
    pause_after_invalid: bool,
    glyphs: DisplayConfig,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R, input: &InputConfig, glyphs: &DisplayConfig) -> Self {
        LineInput {
            reader,
            quit_keyword: input.quit_keyword.trim().to_uppercase(),
            pause_after_invalid: input.pause_after_invalid,
            glyphs: glyphs.clone(),
        }
    }

    /// Read one line. `None` at end of input. Bytes that are not UTF-8 are
    /// replaced so the line is rejected as a move instead of failing the read.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

impl<R: BufRead> MoveInput for LineInput<R> {
    fn next_command(
        &mut self,
        player: Player,
        board: &Board,
        out: &mut dyn Write,
    ) -> io::Result<Command> {
        let width = board.width();
        loop {
            writeln!(
                out,
                "Player {}, enter 1 to {} or {}:",
                self.glyphs.player_glyph(player),
                width,
                self.quit_keyword
            )?;
            write!(out, "> ")?;
            out.flush()?;

            let Some(line) = self.read_line()? else {
                tracing::debug!("input closed, treating as quit");
                return Ok(Command::Quit);
            };
            let text = line.trim().to_uppercase();

            if text == self.quit_keyword {
                return Ok(Command::Quit);
            }

            match parse_column(&text, board) {
                Ok(column) => return Ok(Command::Drop(column)),
                Err(err) => {
                    tracing::debug!(input = %text, error = %err, "rejected move");
                    match err {
                        InputError::ColumnFull(value) => {
                            writeln!(out, "Column {} is full, choose another.", value)?
                        }
                        InputError::NotANumber(_) | InputError::OutOfRange { .. } => {
                            writeln!(out, "Enter a number from 1 to {}.", width)?
                        }
                    }
                }
            }

            if self.pause_after_invalid {
                write!(out, "Press Enter to continue...")?;
                out.flush()?;
                if self.read_line()?.is_none() {
                    tracing::debug!("input closed, treating as quit");
                    return Ok(Command::Quit);
                }
            }
        }
    }
}
