use std::fmt;

use crate::error::{ExecError, Result};

/// Direction of a data cursor move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

/// A fixed-length byte tape with a data cursor.
///
/// The cursor is always a valid index: moves that would leave
/// `[0, len)` are rejected and leave it where it was.
/// Cell arithmetic wraps modulo 256.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Box<[u8]>,
    cursor: usize,
}

impl Tape {
    /// Allocate a zeroed tape of `length` cells with the cursor at 0.
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 {
            return Err(ExecError::EmptyTape);
        }
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(length)
            .map_err(|_| ExecError::TapeAllocation { length })?;
        cells.resize(length, 0);
        Ok(Self {
            cells: cells.into_boxed_slice(),
            cursor: 0,
        })
    }

    /// Rebuild a tape from saved cells. Returns `None` if the cursor is not
    /// a valid index into `cells`.
    pub fn from_parts(cells: Vec<u8>, cursor: usize) -> Option<Self> {
        if cursor >= cells.len() {
            return None;
        }
        Some(Self {
            cells: cells.into_boxed_slice(),
            cursor,
        })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline(always)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Move the cursor one cell, returning the new position.
    ///
    /// On a move past either end the cursor is left unchanged and
    /// `PointerOutOfBounds` is returned.
    pub fn shift(&mut self, direction: Direction) -> Result<usize> {
        let candidate = match direction {
            Direction::Left => self.cursor.checked_sub(1),
            Direction::Right => Some(self.cursor + 1).filter(|&c| c < self.cells.len()),
        };
        match candidate {
            Some(next) => {
                self.cursor = next;
                Ok(next)
            }
            None => Err(ExecError::PointerOutOfBounds {
                cursor: self.cursor,
                direction,
            }),
        }
    }

    #[inline(always)]
    pub fn get(&self) -> u8 {
        self.cells[self.cursor]
    }

    #[inline(always)]
    pub fn set(&mut self, value: u8) {
        self.cells[self.cursor] = value;
    }

    #[inline(always)]
    pub fn increment(&mut self) {
        let cell = &mut self.cells[self.cursor];
        *cell = cell.wrapping_add(1);
    }

    #[inline(always)]
    pub fn decrement(&mut self) {
        let cell = &mut self.cells[self.cursor];
        *cell = cell.wrapping_sub(1);
    }
}
