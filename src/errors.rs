use thiserror::Error;

/// The only way maze generation can fail: the grid it was asked for cannot exist.
///
/// The requested sizes are kept as given (possibly negative) so the caller can report them.
#[derive(Error, Eq, PartialEq, Copy, Clone, Debug)]
pub enum MazeError {
    #[error("Invalid maze dimensions {rows} rows x {columns} columns: both must be at least 1")]
    InvalidDimensions { rows: i64, columns: i64 },
}
