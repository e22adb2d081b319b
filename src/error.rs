use thiserror::Error;

use crate::tape::Direction;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, ExecError>;

/// Errors raised while building or running an interpreter.
#[derive(Error, Debug)]
pub enum ExecError {
    /// A cursor move would leave the tape. The cursor was not moved.
    #[error("data cursor at {cursor} cannot move {direction}: tape boundary")]
    PointerOutOfBounds { cursor: usize, direction: Direction },

    /// A bracket scan ran off the end of the program.
    #[error("malformed program: unmatched '{symbol}' at offset {position}")]
    MalformedProgram { position: usize, symbol: char },

    #[error("tape length must be positive")]
    EmptyTape,

    #[error("cannot allocate a tape of {length} cells")]
    TapeAllocation { length: usize },

    /// A restored instruction cursor points past the end of the program.
    #[error("instruction cursor {cursor} is outside a program of {len} bytes")]
    InstructionCursorOutOfRange { cursor: usize, len: usize },

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(#[from] SnapshotError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while decoding a serialized snapshot.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("not a snapshot (bad magic header)")]
    BadMagic,

    #[error("snapshot is truncated")]
    Truncated,

    #[error("snapshot declares {expected} tape cells but carries {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("data cursor {cursor} is outside a tape of {len} cells")]
    DataCursorOutOfRange { cursor: usize, len: usize },

    #[error("snapshot tape is empty")]
    EmptyTape,
}
