use sapper_core::{CellGrid, CellState};

/// How each cell state is drawn in the terminal.
pub(crate) const fn glyph(state: CellState) -> char {
    use CellState::*;
    match state {
        Hidden => '#',
        Flagged => 'F',
        Questioned => '?',
        Revealed(0) => '.',
        // counts never exceed 8
        Revealed(count) => (b'0' + count) as char,
        Mine => '*',
        MineExploded => 'X',
        MineWrong => '!',
    }
}

/// Draws the board with column numbers on top and row numbers on the left.
pub(crate) fn render(grid: &CellGrid) -> String {
    let (width, height) = grid.size();
    let mut out = String::from("    ");
    for x in 0..width {
        out.push_str(&format!("{:>3}", x));
    }
    out.push('\n');
    for y in 0..height {
        out.push_str(&format!("{:>3} ", y));
        for x in 0..width {
            out.push_str("  ");
            out.push(glyph(grid.state((x, y))));
        }
        out.push('\n');
    }
    out
}
