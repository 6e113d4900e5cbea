/// Error type shared by the core library
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("failed to parse literal: {0}")]
    Parse(String),

    #[error("row {row} has {found} entries, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("expected a {}x{} value, got {}x{}", .expected.0, .expected.1, .found.0, .found.1)]
    Dimension {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("edge {edge} references vertex {index}, but only {len} vertices exist")]
    EdgeOutOfBounds { edge: usize, index: usize, len: usize },

    #[error("plot contains nothing to draw")]
    EmptyPlot,
}

pub type Result<T> = std::result::Result<T, Error>;
