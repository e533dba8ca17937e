//! Pure predicates over word paths.
//!
//! A path is an ordered list of `(row, column)` coordinates. None of these functions look at the grid; the ones that
//! care about edges take the grid dimensions alongside the path.

/// A `(row, column)` position in the grid.
pub type Coord = (usize, usize);

/// Returns whether two cells are 8-adjacent: row and column each differ by at most one, and not both by zero.
pub fn is_adjacent(a: Coord, b: Coord) -> bool {
    let dr = a.0.abs_diff(b.0);
    let dc = a.1.abs_diff(b.1);

    dr <= 1 && dc <= 1 && (dr, dc) != (0, 0)
}

/// Returns whether moving from `a` to `b` is a diagonal step.
pub fn is_diagonal_step(a: Coord, b: Coord) -> bool {
    a.0.abs_diff(b.0) == 1 && a.1.abs_diff(b.1) == 1
}

/// Counts the diagonal steps between consecutive cells of the path.
pub fn diagonal_steps(path: &[Coord]) -> usize {
    path.windows(2)
        .filter(|pair| is_diagonal_step(pair[0], pair[1]))
        .count()
}

/// Returns whether the path reaches both the left and right columns, or both the top and bottom rows, of a grid
/// with the given dimensions. An empty path touches nothing.
pub fn touches_opposite_edges(path: &[Coord], num_rows: usize, num_columns: usize) -> bool {
    let (Some(min_row), Some(max_row)) = (
        path.iter().map(|&(r, _)| r).min(),
        path.iter().map(|&(r, _)| r).max(),
    ) else {
        return false;
    };
    let (Some(min_column), Some(max_column)) = (
        path.iter().map(|&(_, c)| c).min(),
        path.iter().map(|&(_, c)| c).max(),
    ) else {
        return false;
    };

    let spans_columns = min_column == 0 && max_column + 1 == num_columns;
    let spans_rows = min_row == 0 && max_row + 1 == num_rows;

    spans_columns || spans_rows
}

/// The spangram has to connect two opposite edges.
pub fn is_spangram_valid(path: &[Coord], num_rows: usize, num_columns: usize) -> bool {
    touches_opposite_edges(path, num_rows, num_columns)
}

/// In the strict variant, regular words must not connect two opposite edges.
pub fn is_regular_word_valid(path: &[Coord], num_rows: usize, num_columns: usize) -> bool {
    !touches_opposite_edges(path, num_rows, num_columns)
}

/// Returns whether every cell of the path lies in one row, or every cell lies in one column.
///
/// A single-cell path is a straight line.
pub fn is_straight_line(path: &[Coord]) -> bool {
    let Some(&(row, column)) = path.first() else {
        return false;
    };

    path.iter().all(|&(r, _)| r == row) || path.iter().all(|&(_, c)| c == column)
}
