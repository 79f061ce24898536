use std::fmt::{Display, Formatter};
use std::num::NonZero;

use ndarray::Ix;

pub(crate) type Coord = usize;
/// A board dimension; boards with zero rows or columns cannot be expressed.
pub type Dimension = NonZero<Coord>;

/// A location `(row, col)` on a board. The top left corner is `Location { row: 0, col: 0 }`.
#[derive(Clone, Eq, Hash, Copy, PartialEq, Ord, PartialOrd, Debug, Default)]
pub struct Location {
    /// Zero-based row, counted downward.
    pub row: Coord,
    /// Zero-based column, counted rightward.
    pub col: Coord,
}

impl Location {
    #[allow(missing_docs)]
    pub const fn new(row: Coord, col: Coord) -> Self {
        Self { row, col }
    }

    pub(crate) fn as_index(&self) -> (Coord, Coord) {
        (self.row, self.col)
    }

    // stepping off the top or left edge wraps around to a huge coordinate, which no array accepts
    pub(crate) fn offset_by(self, rhs: (isize, isize)) -> Self {
        Self {
            row: self.row.wrapping_add_signed(rhs.0),
            col: self.col.wrapping_add_signed(rhs.1),
        }
    }
}

impl From<(Ix, Ix)> for Location {
    fn from(value: (Ix, Ix)) -> Self {
        Self { row: value.0, col: value.1 }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
