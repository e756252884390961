use crate::grid::Grid;
use crate::search::diag::{self, Family};

/// The four views of a grid that word matches are scanned along.
///
/// Horizontal and vertical views have `size` lines of `size` letters each.
/// The diagonal views have `2 * size - 1` lines ordered by ascending
/// diagonal index, with lengths `1, 2, .. size .. 2, 1`.
///
/// # Examples
///
/// ```
/// use lib::prelude::*;
///
/// let grid = Grid::parse(b"ABC\nDEF\nGHI\n")?;
/// let axes = Axes::from_grid(&grid);
///
/// assert!(axes.vertical().iter().map(Vec::as_slice).eq([&b"ADG"[..], b"BEH", b"CFI"]));
/// assert!(axes.major().iter().map(Vec::as_slice).eq([&b"G"[..], b"DH", b"AEI", b"BF", b"C"]));
/// assert!(axes.minor().iter().map(Vec::as_slice).eq([&b"A"[..], b"DB", b"GEC", b"HF", b"I"]));
/// # Ok::<_, GridError>(())
/// ```
#[derive(Debug)]
pub struct Axes {
    size: usize,
    horizontal: Vec<Vec<u8>>,
    vertical: Vec<Vec<u8>>,
    major: Vec<Vec<u8>>,
    minor: Vec<Vec<u8>>,
}

impl Axes {
    /// Derive all four views from a grid.
    pub fn from_grid(grid: &Grid) -> Self {
        let size = grid.size();

        let diagonals = |family: Family| {
            (1..=diag::count(size))
                .map(|n| {
                    (0..family.len(n, size))
                        .map(|offset| {
                            let (row, column) = family.cell(n, offset, size);
                            grid.get(row, column)
                        })
                        .collect()
                })
                .collect()
        };

        Self {
            size,
            horizontal: grid.rows().map(<[u8]>::to_vec).collect(),
            vertical: (0..size)
                .map(|column| (0..size).map(|row| grid.get(row, column)).collect())
                .collect(),
            major: diagonals(Family::Major),
            minor: diagonals(Family::Minor),
        }
    }

    /// Get the width of the underlying grid.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The rows of the grid, unchanged.
    #[inline]
    pub fn horizontal(&self) -> &[Vec<u8>] {
        &self.horizontal
    }

    /// The columns of the grid.
    #[inline]
    pub fn vertical(&self) -> &[Vec<u8>] {
        &self.vertical
    }

    /// The major diagonals, by ascending diagonal index.
    #[inline]
    pub fn major(&self) -> &[Vec<u8>] {
        &self.major
    }

    /// The minor diagonals, by ascending diagonal index.
    #[inline]
    pub fn minor(&self) -> &[Vec<u8>] {
        &self.minor
    }

    /// The diagonals of the given family.
    #[inline]
    pub fn diagonals(&self, family: Family) -> &[Vec<u8>] {
        match family {
            Family::Major => &self.major,
            Family::Minor => &self.minor,
        }
    }
}
