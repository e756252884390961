//! Square character grids.

#[cfg(test)]
mod tests;

use bstr::{BStr, ByteSlice};
use thiserror::Error;

/// Errors raised when validating a grid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// The input was empty.
    #[error("grid is empty")]
    Empty,
    /// A row did not match the width of the first row.
    #[error("row {row} has length {len}, expected {expected}")]
    UnevenRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    /// The number of rows did not match the number of columns.
    #[error("expected square grid, got {rows} rows of {columns} columns")]
    NotSquare { rows: usize, columns: usize },
}

/// A square grid of characters, stored row-major.
///
/// The grid is validated once when parsed and never mutated.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// let grid = Grid::parse(b"ABC\nDEF\nGHI\n")?;
///
/// assert_eq!(grid.size(), 3);
/// assert_eq!(grid.get(1, 2), b'F');
/// assert_eq!(grid.row(2), Some(&b"GHI"[..]));
/// assert!(grid.rows().eq([&b"ABC"[..], b"DEF", b"GHI"]));
/// # Ok::<_, lib::grid::GridError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    data: Vec<u8>,
    size: usize,
}

impl Grid {
    /// Parse and validate a grid out of newline-delimited bytes.
    ///
    /// The width of the first line determines the expected width of every
    /// other line, and the grid must have as many rows as columns. A trailing
    /// newline is permitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::grid::{Grid, GridError};
    ///
    /// assert_eq!(Grid::parse(b""), Err(GridError::Empty));
    ///
    /// assert_eq!(
    ///     Grid::parse(b"ABC\nDE\nFGH\n"),
    ///     Err(GridError::UnevenRow { row: 1, len: 2, expected: 3 })
    /// );
    ///
    /// assert_eq!(
    ///     Grid::parse(b"ABC\nDEF\n"),
    ///     Err(GridError::NotSquare { rows: 2, columns: 3 })
    /// );
    /// ```
    pub fn parse(data: &[u8]) -> Result<Self, GridError> {
        let size = memchr::memchr(b'\n', data).unwrap_or(data.len());

        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut out = Vec::with_capacity(size * size);
        let mut rows = 0;

        for (row, line) in data.lines().enumerate() {
            if line.len() != size {
                return Err(GridError::UnevenRow {
                    row,
                    len: line.len(),
                    expected: size,
                });
            }

            out.extend_from_slice(line);
            rows += 1;
        }

        if rows != size {
            return Err(GridError::NotSquare {
                rows,
                columns: size,
            });
        }

        Ok(Self { data: out, size })
    }

    /// Get the width (and height) of the grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Access the specified row in the grid.
    #[inline]
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        let start = row.checked_mul(self.size)?;
        self.data.get(start..start.checked_add(self.size)?)
    }

    /// Iterate over rows in the grid.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.size)
    }

    /// Get the letter at the given row and column.
    #[inline]
    #[track_caller]
    pub fn get(&self, row: usize, column: usize) -> u8 {
        match self.try_get(row, column) {
            Some(value) => value,
            None => panic!("missing row `{row}`, column `{column}`"),
        }
    }

    /// Get the letter at the given row and column.
    #[inline]
    pub fn try_get(&self, row: usize, column: usize) -> Option<u8> {
        if column >= self.size {
            return None;
        }

        self.row(row)?.get(column).copied()
    }
}

impl core::fmt::Debug for Grid {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list()
            .entries(self.rows().map(BStr::new))
            .finish()
    }
}
