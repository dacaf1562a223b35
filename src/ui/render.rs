use crate::config::DisplayConfig;
use crate::game::Board;

/// Render the board as text: a leading blank line, the column labels, a
/// bordered box with one line per row, top to bottom.
///
/// ```text
///
///      1234567
///     +-------+
///     |.......|
///     |...X...|
///     +-------+
/// ```
pub fn render_board(board: &Board, glyphs: &DisplayConfig) -> String {
    let mut out = String::from("\n     ");
    for column in 0..board.width() {
        // Single digit per column keeps the header aligned with the cells
        let label = (column + 1) % 10;
        out.push(char::from(b'0' + label as u8));
    }

    let border = format!("\n    +{}+", "-".repeat(board.width()));
    out.push_str(&border);

    for row in board.rows() {
        out.push_str("\n    |");
        out.extend(row.iter().map(|&cell| glyphs.cell_glyph(cell)));
        out.push('|');
    }

    out.push_str(&border);
    out
}
