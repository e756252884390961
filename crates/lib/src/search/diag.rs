//! Closed-form diagonal coordinate transforms.
//!
//! Diagonals are identified by a 1-based index `1..=2 * size - 1` within
//! their family. Major diagonals run top-left to bottom-right, minor
//! diagonals top-right to bottom-left, and cells along a diagonal are
//! addressed by their offset from the diagonal's start cell.

/// Number of diagonals per family in a square grid.
#[inline]
pub fn count(size: usize) -> usize {
    2 * size - 1
}

/// A family of diagonals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Top-left to bottom-right, row and column co-increase.
    Major,
    /// Top-right to bottom-left, row increases while column decreases.
    Minor,
}

impl Family {
    /// Number of cells on the given diagonal.
    #[inline]
    #[track_caller]
    pub fn len(self, diagonal: usize, size: usize) -> usize {
        check(diagonal, size);
        size - diagonal.abs_diff(size)
    }

    /// Map a position along a diagonal to its grid cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::search::Family;
    ///
    /// // The main diagonals of a 3x3 grid.
    /// assert_eq!(Family::Major.cell(3, 1, 3), (1, 1));
    /// assert_eq!(Family::Minor.cell(3, 0, 3), (2, 0));
    /// assert_eq!(Family::Minor.cell(3, 2, 3), (0, 2));
    /// ```
    #[inline]
    #[track_caller]
    pub fn cell(self, diagonal: usize, offset: usize, size: usize) -> (usize, usize) {
        check(diagonal, size);

        let column = diagonal.saturating_sub(size) + offset;

        let row = match self {
            Family::Major => size.saturating_sub(diagonal) + offset,
            Family::Minor => (diagonal - 1).min(size - 1) - offset,
        };

        (row, column)
    }

    /// Map a grid cell to the diagonal passing through it and the offset of
    /// the cell along that diagonal.
    ///
    /// Inverse of [`Family::cell`] for any in-bounds cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::search::Family;
    ///
    /// assert_eq!(Family::Major.coords(0, 2, 3), (5, 0));
    /// assert_eq!(Family::Minor.coords(0, 2, 3), (3, 2));
    /// ```
    #[inline]
    pub fn coords(self, row: usize, column: usize, size: usize) -> (usize, usize) {
        match self {
            Family::Major => (size + column - row, row.min(column)),
            Family::Minor => (row + column + 1, column.min(size - 1 - row)),
        }
    }
}

#[inline]
#[track_caller]
fn check(diagonal: usize, size: usize) {
    assert!(
        (1..=count(size)).contains(&diagonal),
        "diagonal index `{diagonal}` out of range 1..={}",
        count(size)
    );
}
