use crate::grid::Grid;

use super::{count_crosses, count_words, diag, diagonal_matches, Axes, Family, Needle};

/// The canonical 10x10 word search sample.
const SAMPLE: &[u8] = b"\
MMMSXXMASM
MSAMXMSMSA
AMXSXMAAMM
MSAMASMSMX
XMASAMXAMM
XXAMMXXAMA
SMSMSASXSS
SAXAMASAAA
MAMMMXMMMM
MXMXAXMASX
";

fn grid(size: usize) -> Grid {
    let mut data = Vec::new();

    for row in 0..size {
        for column in 0..size {
            data.push(b'A' + ((row + column) % 26) as u8);
        }

        data.push(b'\n');
    }

    Grid::parse(&data).unwrap()
}

#[test]
fn test_axes_shape() {
    for size in 1..=8 {
        let axes = Axes::from_grid(&grid(size));

        assert_eq!(axes.horizontal().len(), size);
        assert_eq!(axes.vertical().len(), size);

        for family in [Family::Major, Family::Minor] {
            let diagonals = axes.diagonals(family);
            assert_eq!(diagonals.len(), 2 * size - 1);

            // Lengths run 1, 2, .. size .. 2, 1.
            for (n, diagonal) in diagonals.iter().enumerate() {
                let expected = size - (n + 1).abs_diff(size);
                assert_eq!(diagonal.len(), expected);
                assert_eq!(family.len(n + 1, size), expected);
            }
        }
    }
}

#[test]
fn test_coords_round_trip() {
    for size in [1, 2, 3, 5, 10] {
        for row in 0..size {
            for column in 0..size {
                for family in [Family::Major, Family::Minor] {
                    let (diagonal, offset) = family.coords(row, column, size);

                    assert!((1..=diag::count(size)).contains(&diagonal));
                    assert!(offset < family.len(diagonal, size));
                    assert_eq!(family.cell(diagonal, offset, size), (row, column));
                }
            }
        }
    }
}

#[test]
fn test_overlapping_matches() {
    let needle = Needle::new(b"MAS").unwrap();
    assert_eq!(needle.len(), 3);
    assert!(!needle.is_empty());

    // Both orientations overlapping at the shared `A` yield two matches.
    assert!(needle.matches(b"MASAM").eq([0, 2]));
    assert!(needle.matches(b"SAMAS").eq([0, 2]));
    assert!(needle.matches(b"XMASX").eq([1]));
    assert!(needle.matches(b"MAMAS").eq([2]));
    assert_eq!(needle.matches(b"MA").count(), 0);
    assert_eq!(needle.matches(b"").count(), 0);
}

#[test]
fn test_diagonal_matches() {
    let grid = Grid::parse(b"M__\n_A_\n__S\n").unwrap();
    let axes = Axes::from_grid(&grid);
    let needle = Needle::new(b"MAS").unwrap();

    let matches = diagonal_matches(&axes, &needle);
    assert_eq!(matches.len(), 1);

    let m = matches[0];
    assert_eq!(m.family, Family::Major);
    assert_eq!(m.diagonal, 3);
    assert_eq!(m.offset, 0);
    assert_eq!(m.center, 1);
    assert_eq!(m.line, "MAS");

    // The match's center maps back to the middle cell.
    assert_eq!(Family::Major.cell(m.diagonal, m.center, 3), (1, 1));
}

#[test]
fn test_sample_word_count() {
    let grid = Grid::parse(SAMPLE).unwrap();
    let axes = Axes::from_grid(&grid);

    assert_eq!(count_words(&axes, b"XMAS").unwrap(), 18);
}

#[test]
fn test_sample_cross_count() {
    let grid = Grid::parse(SAMPLE).unwrap();
    let axes = Axes::from_grid(&grid);

    assert_eq!(count_crosses(&axes, b"MAS").unwrap(), 9);
    // Pure over its inputs.
    assert_eq!(count_crosses(&axes, b"MAS").unwrap(), 9);
}

#[test]
fn test_single_cell_grid() {
    let grid = Grid::parse(b"M\n").unwrap();
    let axes = Axes::from_grid(&grid);

    assert_eq!(count_words(&axes, b"MAS").unwrap(), 0);
    assert_eq!(count_crosses(&axes, b"MAS").unwrap(), 0);
}

#[test]
fn test_minimal_cross() {
    // A single X shape.
    let grid = Grid::parse(b"M_S\n_A_\nM_S\n").unwrap();
    let axes = Axes::from_grid(&grid);

    assert_eq!(count_crosses(&axes, b"MAS").unwrap(), 1);

    // One match per family, but their centers fall on different cells.
    let grid = Grid::parse(b"__S_\nMA__\nMA__\n__S_\n").unwrap();
    let axes = Axes::from_grid(&grid);

    assert_eq!(count_crosses(&axes, b"MAS").unwrap(), 0);
}
