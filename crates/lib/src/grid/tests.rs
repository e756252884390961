use super::{Grid, GridError};

#[test]
fn test_parse() {
    let grid = Grid::parse(b"AB\nCD\n").unwrap();
    assert_eq!(grid.size(), 2);
    assert_eq!(grid.get(0, 0), b'A');
    assert_eq!(grid.get(1, 1), b'D');
    assert_eq!(grid.try_get(2, 0), None);
    assert_eq!(grid.try_get(0, 2), None);

    // No trailing newline.
    let grid = Grid::parse(b"AB\nCD").unwrap();
    assert_eq!(grid.size(), 2);
    assert_eq!(grid.get(1, 0), b'C');

    // The trailing newline does not change the parsed grid.
    assert_eq!(Grid::parse(b"AB\nCD\n"), Grid::parse(b"AB\nCD"));
}

#[test]
fn test_malformed() {
    assert_eq!(Grid::parse(b""), Err(GridError::Empty));
    assert_eq!(Grid::parse(b"\n\n"), Err(GridError::Empty));

    assert_eq!(
        Grid::parse(b"ABC\nDEFG\nHIJ\n"),
        Err(GridError::UnevenRow {
            row: 1,
            len: 4,
            expected: 3
        })
    );

    // A blank interior line is an uneven row, not a separator.
    assert_eq!(
        Grid::parse(b"AB\n\nCD\n"),
        Err(GridError::UnevenRow {
            row: 1,
            len: 0,
            expected: 2
        })
    );

    assert_eq!(
        Grid::parse(b"ABC\nDEF\n"),
        Err(GridError::NotSquare {
            rows: 2,
            columns: 3
        })
    );
}

#[test]
fn test_single_cell() {
    let grid = Grid::parse(b"X\n").unwrap();
    assert_eq!(grid.size(), 1);
    assert_eq!(grid.get(0, 0), b'X');
    assert!(grid.rows().eq([&b"X"[..]]));
}
