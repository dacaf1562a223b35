//! Four-in-a-row detection over the whole board.

use super::board::{Board, RUN_LENGTH};
use super::player::Player;

/// Direction vectors as (column step, row step). Rows grow downward.
const DIRECTIONS: [(isize, isize); 4] = [
    (1, 0),  // horizontal
    (0, 1),  // vertical
    (1, 1),  // diagonal down-right
    (-1, 1), // diagonal down-left
];

/// A winning line as (column, row) coordinates, anchor first.
pub type Run = [(usize, usize); RUN_LENGTH];

/// Check whether `player` has four tiles in a row anywhere on the board.
pub fn check_winner(board: &Board, player: Player) -> bool {
    winning_run(board, player).is_some()
}

/// Find the first run of four belonging to `player`, scanning anchors
/// top-left to bottom-right and directions in [`DIRECTIONS`] order.
pub fn winning_run(board: &Board, player: Player) -> Option<Run> {
    for row in 0..board.height() {
        for column in 0..board.width() {
            for &(dc, dr) in &DIRECTIONS {
                if let Some(run) = run_from(board, column, row, dc, dr) {
                    if run.iter().all(|&(c, r)| board.cell(c, r).is_player(player)) {
                        return Some(run);
                    }
                }
            }
        }
    }
    None
}

/// Coordinates of the run anchored at (column, row) along (dc, dr), or
/// `None` when the run would leave the board.
fn run_from(board: &Board, column: usize, row: usize, dc: isize, dr: isize) -> Option<Run> {
    let span = (RUN_LENGTH - 1) as isize;
    let end_column = column as isize + dc * span;
    let end_row = row as isize + dr * span;
    if end_column < 0
        || end_row < 0
        || end_column >= board.width() as isize
        || end_row >= board.height() as isize
    {
        return None;
    }

    let mut run = [(0, 0); RUN_LENGTH];
    for (i, slot) in run.iter_mut().enumerate() {
        let step = i as isize;
        *slot = (
            (column as isize + dc * step) as usize,
            (row as isize + dr * step) as usize,
        );
    }
    Some(run)
}
