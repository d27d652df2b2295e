use crate::grid::{Grid, Position};

/// Number the moves of a solution over a grid of the same dimensions.
///
/// Cell `(x, y)` holds the 1-based step at which the solution selects it, or
/// 0 if it never does. Displaying the result lays the trail over the grid.
pub fn move_order<T>(grid: &Grid<T>, moves: &[Position]) -> Grid<usize> {
    let mut order = Grid::filled(grid.width(), grid.height());
    for (step, &(x, y)) in moves.iter().enumerate() {
        order[(x, y)] = step + 1;
    }
    order
}
