use std::fmt;
use std::ops::{Index, IndexMut};

/// A coordinate into a [`Grid`]: `(column, row)`, i.e. `(x, y)`.
pub type Position = (usize, usize);

/// A representation of a 2d grid.
///
/// For indexing operations on this grid, `(0, 0)` is the top left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T>
where
    T: Default + Clone,
{
    /// A grid of the given dimensions holding `T::default()` in every cell.
    pub fn filled(width: usize, height: usize) -> Self {
        Grid {
            cells: vec![T::default(); width * height],
            width,
            height,
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from rows of equal length, or `None` if the rows are
    /// ragged.
    pub fn from_rows<R>(rows: R) -> Option<Self>
    where
        R: IntoIterator<Item = Vec<T>>,
    {
        let mut cells = Vec::new();
        let mut width = None;
        let mut height = 0;
        for row in rows {
            match width {
                None => width = Some(row.len()),
                Some(width) if width != row.len() => return None,
                Some(_) => {}
            }
            cells.extend(row);
            height += 1;
        }
        Some(Grid {
            cells,
            width: width.unwrap_or(0),
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the internal index where the desired value is stored,
    /// or `None` if it is out of bounds.
    fn idx(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then_some((y * self.width) + x)
    }

    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.idx(x, y).map(|idx| &self.cells[idx])
    }

    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.idx(x, y).map(move |idx| &mut self.cells[idx])
    }
}

impl<T> Index<Position> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): Position) -> &Self::Output {
        self.get(x, y).unwrap()
    }
}

impl<T> IndexMut<Position> for Grid<T> {
    fn index_mut(&mut self, (x, y): Position) -> &mut Self::Output {
        self.get_mut(x, y).unwrap()
    }
}

impl<T> fmt::Display for Grid<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                if x > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{:>2}", self.cells[(y * self.width) + x])?;
            }
            if y + 1 < self.height {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
