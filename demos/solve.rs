//! Solve a breach puzzle and print the grid, the score, and the move order.

use icepick::{move_order, Grid, Puzzle, Sequence, Symbol};

fn code_matrix() -> Grid<Symbol> {
    let rows = [
        [0xE9, 0xE9, 0x7A, 0xBD, 0x55, 0x55],
        [0x1C, 0x1C, 0x1C, 0x7A, 0x55, 0x39],
        [0x1C, 0x7A, 0x7A, 0x1C, 0x55, 0x1C],
        [0xBD, 0xE9, 0x55, 0x7A, 0x55, 0x7A],
        [0x55, 0x55, 0x55, 0x7A, 0x55, 0x1C],
        [0xBD, 0xBD, 0xE9, 0x1C, 0x55, 0xE9],
    ];
    Grid::from_rows(rows.map(|row| row.map(Symbol).to_vec()))
        .expect("the example matrix is rectangular")
}

fn main() -> Result<(), icepick::Error> {
    let sequences = vec![
        Sequence::new([0x55u8, 0x55, 0xBD]),
        Sequence::new([0xBDu8, 0xBD, 0xBD]),
        Sequence::new([0x55u8, 0xE9, 0x55]),
    ];
    let puzzle = Puzzle::new(code_matrix(), sequences, 5)?;

    println!("{}", puzzle.grid());
    println!();

    let solution = puzzle.solve();
    println!("score: {}", solution.score);
    println!("moves: {:?}", solution.moves);
    println!();
    println!("{}", move_order(puzzle.grid(), &solution.moves));

    Ok(())
}
