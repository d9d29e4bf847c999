use thiserror::Error;

/// Errors reported by grid construction and pattern placement.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid must have at least one row and one column (got {rows}x{cols})")]
    EmptyGrid { rows: usize, cols: usize },

    #[error(
        "pattern `{pattern}` ({pattern_rows}x{pattern_cols}) does not fit a {rows}x{cols} grid at origin ({origin_row}, {origin_col})"
    )]
    PatternOutOfBounds {
        pattern: &'static str,
        pattern_rows: usize,
        pattern_cols: usize,
        origin_row: usize,
        origin_col: usize,
        rows: usize,
        cols: usize,
    },
}
