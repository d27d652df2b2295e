use crate::{
    grid::{Grid, Position},
    symbol::Symbol,
};

/// The line the next selection is constrained to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Active {
    Row(usize),
    Column(usize),
}

impl Default for Active {
    fn default() -> Self {
        Self::Row(0)
    }
}

impl Active {
    /// Return the new active set if the specified point is valid, or `Error::NotActive` otherwise.
    pub fn toggle(self, x: usize, y: usize) -> Result<Self, Error> {
        let err = Err(Error::NotActive { x, y, active: self });
        match self {
            Active::Row(row) => {
                if y != row {
                    err
                } else {
                    Ok(Active::Column(x))
                }
            }
            Active::Column(column) => {
                if x != column {
                    err
                } else {
                    Ok(Active::Row(y))
                }
            }
        }
    }
}

/// Working state of one session over a code matrix.
///
/// Values are never overwritten: a selected cell is tracked in the `chosen`
/// mask, and the selection trail makes undoing the latest pick O(1). The
/// active line starts at the top row and toggles with every selection, so
/// alternation between rows and columns needs no bookkeeping by callers.
#[derive(Debug, Clone)]
pub struct Matrix {
    values: Grid<Symbol>,
    chosen: Grid<bool>,
    selections: Vec<Position>,
    active: Active,
}

impl Matrix {
    pub fn new(values: Grid<Symbol>) -> Self {
        let chosen = Grid::filled(values.width(), values.height());
        Matrix {
            values,
            chosen,
            selections: Vec::new(),
            active: Active::default(),
        }
    }

    pub fn active(&self) -> Active {
        self.active
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<(), Error> {
        if x < self.values.width() && y < self.values.height() {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                x,
                y,
                width: self.values.width(),
                height: self.values.height(),
            })
        }
    }

    /// The positions of the active line, in scan order: left to right for a
    /// row, top to bottom for a column.
    pub fn active_line(&self) -> Vec<Position> {
        match self.active {
            Active::Row(y) => (0..self.values.width()).map(|x| (x, y)).collect(),
            Active::Column(x) => (0..self.values.height()).map(|y| (x, y)).collect(),
        }
    }

    /// The value at `(x, y)`, or `None` once the cell has been selected.
    pub fn available(&self, x: usize, y: usize) -> Option<Symbol> {
        (!self.chosen[(x, y)]).then_some(self.values[(x, y)])
    }

    /// Select the point at the given coordinates if it is legal to do so.
    pub fn select(&mut self, x: usize, y: usize) -> Result<(), Error> {
        self.check_bounds(x, y)?;
        if self.chosen[(x, y)] {
            return Err(Error::AlreadySelected { x, y });
        }
        // the following line modifies self, so we can't fail past that point
        self.active = self.active.toggle(x, y)?;
        self.chosen[(x, y)] = true;

        self.selections.push((x, y));

        Ok(())
    }

    /// Deselect the most recent point selected, restoring the previous
    /// active line.
    ///
    /// If the selection queue is empty, silently do nothing.
    pub fn deselect(&mut self) {
        if let Some((x, y)) = self.selections.pop() {
            debug_assert!(self.chosen[(x, y)], "point must already have been selected");
            self.chosen[(x, y)] = false;
            self.active = self
                .active
                .toggle(x, y)
                .expect("toggle must be valid at this point");
        }
    }

    /// Iterate over the selected values
    pub fn selected_values(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.selections
            .iter()
            .copied()
            .map(|(x, y)| self.values[(x, y)])
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("the point `({x}, {y})` is out of bounds. max: `({width}, {height})`")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("the point `({x}, {y})` is not a member of the active set: {active:?}")]
    NotActive { x: usize, y: usize, active: Active },
    #[error("the point `({x}, {y})` has already been selected")]
    AlreadySelected { x: usize, y: usize },
}
