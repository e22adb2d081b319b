use clap::ValueEnum;

/// Number of cells on the tape.
pub const TAPE_LENGTH: usize = 1 << 16;

/// What happens when `<` or `>` would move the data cursor off the tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum BoundsPolicy {
    /// Discard the move, count the violation, keep running.
    #[default]
    Permissive,
    /// Halt the run with `PointerOutOfBounds`.
    Strict,
}

/// Byte stored by `,` once the input stream is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum EofBehavior {
    /// Store 255 (an all-ones end-of-input marker truncated to a cell).
    #[default]
    MaxByte,
    /// Store 0.
    Zero,
    /// Leave the current cell untouched.
    Unchanged,
}

/// Configuration for a single interpreter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Number of cells on the tape.
    pub tape_length: usize,
    pub bounds: BoundsPolicy,
    pub eof: EofBehavior,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tape_length: TAPE_LENGTH,
            bounds: BoundsPolicy::default(),
            eof: EofBehavior::default(),
        }
    }
}
