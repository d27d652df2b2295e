use crate::{
    grid::{Grid, Position},
    matrix::Matrix,
    sequence::{MatchProgress, Sequence},
    symbol::Symbol,
};

/// A puzzle instance: the code matrix, the target sequences, and the number
/// of moves the buffer can hold.
#[derive(Debug, Clone)]
pub struct Puzzle {
    grid: Grid<Symbol>,
    sequences: Vec<Sequence>,
    buffer: usize,
}

/// The outcome of a solve: the best score found and the moves achieving it,
/// in selection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub score: u32,
    pub moves: Vec<Position>,
}

impl Puzzle {
    pub fn new(grid: Grid<Symbol>, sequences: Vec<Sequence>, buffer: usize) -> Result<Self, Error> {
        if grid.width() == 0 || grid.height() == 0 {
            return Err(Error::EmptyGrid);
        }
        if grid.width() != grid.height() {
            return Err(Error::NonSquareGrid {
                width: grid.width(),
                height: grid.height(),
            });
        }
        if let Some(index) = sequences.iter().position(Sequence::is_empty) {
            return Err(Error::EmptySequence { index });
        }
        if buffer == 0 {
            return Err(Error::ZeroBuffer);
        }
        Ok(Puzzle {
            grid,
            sequences,
            buffer,
        })
    }

    pub fn grid(&self) -> &Grid<Symbol> {
        &self.grid
    }

    /// Search for the best selection trail the buffer allows.
    ///
    /// Branching is pruned to the cells tied for each line's best immediate
    /// score, so the result is locally greedy rather than globally optimal.
    /// Ties prefer the candidate earliest in scan order at every depth, and
    /// the trail fills the whole buffer whenever enough cells remain, even
    /// when no further points are available.
    pub fn solve(&self) -> Solution {
        if self.buffer == 0 {
            return Solution {
                score: 0,
                moves: Vec::new(),
            };
        }

        let mut matrix = Matrix::new(self.grid.clone());
        let progress = MatchProgress::new(self.sequences.len());
        let (score, mut moves) = self.explore(&mut matrix, &progress, 1);
        // moves accumulate from the leaves up
        moves.reverse();
        Solution { score, moves }
    }

    /// Score every cell of the active line as if it were the next selection.
    ///
    /// Each cell is judged against its own copy of the match progress, so
    /// siblings never contaminate each other.
    fn score_line(
        &self,
        cells: &[Option<Symbol>],
        progress: &MatchProgress,
    ) -> Vec<(u32, MatchProgress)> {
        cells
            .iter()
            .map(|&cell| {
                let mut progress = progress.clone();
                let gained = progress.observe(&self.sequences, cell);
                (gained, progress)
            })
            .collect()
    }

    /// Recursively explore from the current matrix state, returning the best
    /// score attainable from here down and its moves in reverse order.
    fn explore(
        &self,
        matrix: &mut Matrix,
        progress: &MatchProgress,
        depth: usize,
    ) -> (u32, Vec<Position>) {
        let line = matrix.active_line();
        let cells: Vec<Option<Symbol>> = line
            .iter()
            .map(|&(x, y)| matrix.available(x, y))
            .collect();
        let scored = self.score_line(&cells, progress);
        let top = scored.iter().map(|(gained, _)| *gained).max().unwrap_or(0);
        // every unconsumed cell tied for the line's best score is a branch
        let candidates: Vec<usize> = (0..line.len())
            .filter(|&i| scored[i].0 == top && cells[i].is_some())
            .collect();

        if depth >= self.buffer {
            let moves = candidates
                .first()
                .map(|&i| vec![line[i]])
                .unwrap_or_default();
            return (top, moves);
        }

        let mut best: Option<(u32, Vec<Position>)> = None;
        for &i in &candidates {
            let (x, y) = line[i];
            matrix
                .select(x, y)
                .expect("candidates are unselected cells on the active line");
            let (child_score, mut moves) = self.explore(matrix, &scored[i].1, depth + 1);
            matrix.deselect();

            let total = top + child_score;
            if best.as_ref().map_or(true, |(score, _)| total > *score) {
                moves.push((x, y));
                best = Some((total, moves));
            }
        }

        // with no selectable cell left on the line, top is necessarily 0
        best.unwrap_or((top, Vec::new()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the grid is empty")]
    EmptyGrid,
    #[error("the grid is `{width}x{height}`, but must be square")]
    NonSquareGrid { width: usize, height: usize },
    #[error("target sequence `{index}` is empty")]
    EmptySequence { index: usize },
    #[error("the buffer must hold at least one move")]
    ZeroBuffer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn grid_of(rows: &[&[u8]]) -> Grid<Symbol> {
        Grid::from_rows(
            rows.iter()
                .map(|row| row.iter().copied().map(Symbol).collect()),
        )
        .unwrap()
    }

    fn code_matrix() -> Grid<Symbol> {
        grid_of(&[
            &[0xE9, 0xE9, 0x7A, 0xBD, 0x55, 0x55],
            &[0x1C, 0x1C, 0x1C, 0x7A, 0x55, 0x39],
            &[0x1C, 0x7A, 0x7A, 0x1C, 0x55, 0x1C],
            &[0xBD, 0xE9, 0x55, 0x7A, 0x55, 0x7A],
            &[0x55, 0x55, 0x55, 0x7A, 0x55, 0x1C],
            &[0xBD, 0xBD, 0xE9, 0x1C, 0x55, 0xE9],
        ])
    }

    fn daemons() -> Vec<Sequence> {
        vec![
            Sequence::new([0x55u8, 0x55, 0xBD]),
            Sequence::new([0xBDu8, 0xBD, 0xBD]),
            Sequence::new([0x55u8, 0xE9, 0x55]),
        ]
    }

    #[test]
    fn rejects_an_empty_grid() {
        let err = Puzzle::new(Grid::from_rows(Vec::<Vec<Symbol>>::new()).unwrap(), daemons(), 5)
            .unwrap_err();
        assert!(matches!(err, Error::EmptyGrid));
    }

    #[test]
    fn rejects_a_non_square_grid() {
        let grid = grid_of(&[&[0x1C, 0x55], &[0xBD, 0xE9], &[0x7A, 0x1C]]);
        let err = Puzzle::new(grid, daemons(), 5).unwrap_err();
        assert!(matches!(err, Error::NonSquareGrid { width: 2, height: 3 }));
    }

    #[test]
    fn rejects_an_empty_sequence() {
        let sequences = vec![
            Sequence::new([0x55u8]),
            Sequence::new(Vec::<Symbol>::new()),
        ];
        let err = Puzzle::new(grid_of(&[&[0x1C]]), sequences, 5).unwrap_err();
        assert!(matches!(err, Error::EmptySequence { index: 1 }));
    }

    #[test]
    fn rejects_a_zero_buffer() {
        let err = Puzzle::new(grid_of(&[&[0x1C]]), daemons(), 0).unwrap_err();
        assert!(matches!(err, Error::ZeroBuffer));
    }

    #[rstest]
    // the lone sequence has weight 1, completion pays 9
    #[case(vec![Sequence::new([0x1Cu8])], 9)]
    // index 1 has weight 2, completion pays 18
    #[case(
        vec![Sequence::new([0xBDu8]), Sequence::new([0x1Cu8])],
        18
    )]
    fn a_single_cell_can_complete_a_sequence(
        #[case] sequences: Vec<Sequence>,
        #[case] score: u32,
    ) {
        let puzzle = Puzzle::new(grid_of(&[&[0x1C]]), sequences, 1).unwrap();
        let solution = puzzle.solve();
        assert_eq!(solution.score, score);
        assert_eq!(solution.moves, vec![(0, 0)]);
    }

    #[test]
    fn a_zero_score_still_fills_the_buffer() {
        let grid = grid_of(&[
            &[0x1C, 0x1C, 0x1C],
            &[0x1C, 0x1C, 0x1C],
            &[0x1C, 0x1C, 0x1C],
        ]);
        let sequences = vec![Sequence::new([0x55u8]), Sequence::new([0xBDu8])];
        let puzzle = Puzzle::new(grid, sequences, 3).unwrap();
        let solution = puzzle.solve();
        assert_eq!(solution.score, 0);
        assert_eq!(solution.moves, vec![(0, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn an_empty_buffer_makes_no_moves() {
        // constructed directly: `new` rejects a zero buffer
        let puzzle = Puzzle {
            grid: grid_of(&[&[0x1C]]),
            sequences: daemons(),
            buffer: 0,
        };
        let solution = puzzle.solve();
        assert_eq!(solution.score, 0);
        assert!(solution.moves.is_empty());
    }

    #[test]
    fn completed_sequences_freeze_and_resets_are_hard() {
        let grid = grid_of(&[
            &[0x1C, 0xBD, 0x55, 0xE9],
            &[0x55, 0x7A, 0xBD, 0x1C],
            &[0xE9, 0x55, 0x7A, 0xBD],
            &[0xBD, 0x1C, 0xE9, 0x55],
        ]);
        let sequences = vec![
            Sequence::new([0xBDu8, 0x7A]),
            Sequence::new([0x55u8, 0xBD, 0xE9]),
        ];
        let puzzle = Puzzle::new(grid, sequences, 4).unwrap();
        let solution = puzzle.solve();
        assert_eq!(solution.score, 16);
        assert_eq!(solution.moves, vec![(2, 0), (2, 1), (1, 1), (1, 2)]);
    }

    #[test]
    fn keeps_moving_after_the_targets_are_spent() {
        let grid = grid_of(&[&[0x1C, 0x55], &[0xBD, 0xE9]]);
        let sequences = vec![Sequence::new([0x55u8, 0xBD])];
        // the buffer outlasts the grid; the trail stops when no line has a
        // selectable cell left
        let puzzle = Puzzle::new(grid, sequences, 5).unwrap();
        let solution = puzzle.solve();
        assert_eq!(solution.score, 1);
        assert_eq!(solution.moves, vec![(1, 0), (1, 1), (0, 1), (0, 0)]);
    }

    #[test]
    fn solves_the_shipped_code_matrix() {
        let puzzle = Puzzle::new(code_matrix(), daemons(), 5).unwrap();
        let solution = puzzle.solve();
        assert_eq!(solution.score, 47);
        assert_eq!(
            solution.moves,
            vec![(5, 0), (5, 5), (4, 5), (4, 0), (3, 0)]
        );
    }

    #[test]
    fn solved_paths_replay_as_legal_selections() {
        let puzzle = Puzzle::new(code_matrix(), daemons(), 5).unwrap();
        let solution = puzzle.solve();

        let mut matrix = Matrix::new(code_matrix());
        for &(x, y) in &solution.moves {
            matrix.select(x, y).unwrap();
        }
    }

    #[test]
    fn scoring_a_line_is_pure() {
        let puzzle = Puzzle::new(code_matrix(), daemons(), 5).unwrap();
        let progress = MatchProgress::new(puzzle.sequences.len());
        let cells: Vec<Option<Symbol>> =
            (0..6).map(|x| Some(puzzle.grid[(x, 0)])).collect();

        let first = puzzle.score_line(&cells, &progress);
        let second = puzzle.score_line(&cells, &progress);
        assert_eq!(first.len(), cells.len());
        assert_eq!(first, second);
    }

    #[test]
    fn candidates_score_against_independent_progress() {
        let puzzle = Puzzle::new(
            grid_of(&[&[0x55, 0x55], &[0x55, 0x55]]),
            vec![Sequence::new([0x55u8, 0x55])],
            2,
        )
        .unwrap();
        let progress = MatchProgress::new(1);
        let cells = vec![Some(Symbol(0x55)), Some(Symbol(0x55))];

        let scored = puzzle.score_line(&cells, &progress);
        // both cells extend the same fresh prefix; neither sees the other
        assert_eq!(scored[0].0, 1);
        assert_eq!(scored[1].0, 1);
    }

    #[test]
    fn no_sequences_means_no_points() {
        let puzzle = Puzzle::new(grid_of(&[&[0x1C]]), Vec::new(), 1).unwrap();
        let solution = puzzle.solve();
        assert_eq!(solution.score, 0);
        assert_eq!(solution.moves, vec![(0, 0)]);
    }
}
