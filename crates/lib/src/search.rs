//! Word-search scanning over the axes of a square grid.

mod axes;
pub mod diag;
mod needle;
#[cfg(test)]
mod tests;

use std::collections::HashSet;

use bstr::BStr;

pub use self::axes::Axes;
pub use self::diag::Family;
pub use self::needle::{Needle, SearchError, MAX_WORD};

/// One occurrence of a search word along a diagonal, in either orientation.
#[derive(Debug, Clone, Copy)]
pub struct Match<'a> {
    /// The diagonal family the match was found in.
    pub family: Family,
    /// 1-based index of the diagonal within its family.
    pub diagonal: usize,
    /// Start offset of the match within the diagonal.
    pub offset: usize,
    /// Offset of the word's middle letter within the diagonal.
    pub center: usize,
    /// The diagonal the match was found in, kept for auditing.
    pub line: &'a BStr,
}

/// Find every match of `needle` along both diagonal families.
///
/// Matches are produced per family, by ascending diagonal index and start
/// offset within each diagonal.
pub fn diagonal_matches<'a>(axes: &'a Axes, needle: &Needle) -> Vec<Match<'a>> {
    let mut matches = Vec::new();

    for family in [Family::Major, Family::Minor] {
        for (n, line) in axes.diagonals(family).iter().enumerate() {
            matches.extend(needle.matches(line).map(|offset| Match {
                family,
                diagonal: n + 1,
                offset,
                center: offset + needle.center(),
                line: BStr::new(line),
            }));
        }
    }

    matches
}

/// Count occurrences of `word` along all four axis families, in both
/// orientations.
///
/// This is the full 8-direction word count: every horizontal, vertical and
/// diagonal occurrence, read forwards or backwards, counted once per
/// position and orientation.
pub fn count_words(axes: &Axes, word: &[u8]) -> Result<u32, SearchError> {
    let needle = Needle::new(word)?;
    let mut count = 0;

    for lines in [
        axes.horizontal(),
        axes.vertical(),
        axes.major(),
        axes.minor(),
    ] {
        for line in lines {
            count += needle.matches(line).count() as u32;
        }
    }

    Ok(count)
}

/// Count the grid cells where a major-diagonal match of `word` and a
/// minor-diagonal match share their middle letter.
///
/// Each major match contributes at most one: its center cell either is or
/// is not the center of a minor match. Matches whose diagonals intersect
/// anywhere other than both centers never count.
pub fn count_crosses(axes: &Axes, word: &[u8]) -> Result<u32, SearchError> {
    let needle = Needle::new(word)?;
    let size = axes.size();

    let matches = diagonal_matches(axes, &needle);
    log::debug!("diagonal matches: {matches:?}");

    let minors = matches
        .iter()
        .filter(|m| m.family == Family::Minor)
        .map(|m| (m.diagonal, m.center))
        .collect::<HashSet<_>>();

    let mut count = 0;

    for m in matches.iter().filter(|m| m.family == Family::Major) {
        let (row, column) = Family::Major.cell(m.diagonal, m.center, size);
        let (diagonal, center) = Family::Minor.coords(row, column, size);

        debug_assert_eq!(
            Family::Minor.cell(diagonal, center, size),
            (row, column),
            "diagonal transforms disagree on cell ({row}, {column})"
        );

        if minors.contains(&(diagonal, center)) {
            count += 1;
        }
    }

    Ok(count)
}
