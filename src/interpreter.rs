use std::io::{Read, Write};

use tracing::{debug, trace};

use crate::bracket::{jump_backward, skip_forward};
use crate::config::{BoundsPolicy, Config, EofBehavior};
use crate::error::{ExecError, Result, SnapshotError};
use crate::instruction::{COMMA, DOT, GREATER, LBRACKET, LESS, MINUS, PLUS, RBRACKET};
use crate::snapshot::Snapshot;
use crate::tape::{Direction, Tape};

/// Outcome of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// The instruction cursor reached the end of the program.
    Halt,
}

/// Counters reported once a run halts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub steps: u64,
    pub bounds_violations: u64,
}

/// Interpreter state for one run of a program.
///
/// Holds the borrowed program text, the owned tape (with the data cursor),
/// the instruction cursor and the I/O streams. Execution is direct dispatch
/// on the byte under the instruction cursor; brackets are resolved by a live
/// scan each time a loop boundary is crossed.
pub struct Interpreter<'p, R, W> {
    program: &'p [u8],
    tape: Tape,
    ip: usize,
    config: Config,
    input: R,
    output: W,
    steps: u64,
    bounds_violations: u64,
}

impl<'p, R: Read, W: Write> Interpreter<'p, R, W> {
    /// Create an interpreter with a zeroed tape of `config.tape_length`
    /// cells and both cursors at 0.
    pub fn new(program: &'p [u8], config: Config, input: R, output: W) -> Result<Self> {
        let tape = Tape::new(config.tape_length)?;
        Ok(Self::with_tape(program, tape, 0, config, input, output))
    }

    /// Resume a program from a snapshot. The snapshot's tape replaces the
    /// configured tape length.
    pub fn restore(
        program: &'p [u8],
        snapshot: Snapshot,
        config: Config,
        input: R,
        output: W,
    ) -> Result<Self> {
        if snapshot.instruction_cursor > program.len() {
            return Err(ExecError::InstructionCursorOutOfRange {
                cursor: snapshot.instruction_cursor,
                len: program.len(),
            });
        }
        if snapshot.tape.is_empty() {
            return Err(SnapshotError::EmptyTape.into());
        }
        let len = snapshot.tape.len();
        let cursor = snapshot.data_cursor;
        let tape = Tape::from_parts(snapshot.tape, cursor)
            .ok_or(SnapshotError::DataCursorOutOfRange { cursor, len })?;
        Ok(Self::with_tape(
            program,
            tape,
            snapshot.instruction_cursor,
            config,
            input,
            output,
        ))
    }

    fn with_tape(
        program: &'p [u8],
        tape: Tape,
        ip: usize,
        config: Config,
        input: R,
        output: W,
    ) -> Self {
        Self {
            program,
            tape,
            ip,
            config,
            input,
            output,
            steps: 0,
            bounds_violations: 0,
        }
    }

    /// Execute the instruction under the instruction cursor.
    ///
    /// Returns `Step::Halt` once the cursor sits at the end of the program.
    /// In strict mode a rejected cursor move is returned as an error and the
    /// instruction cursor stays on the offending instruction.
    pub fn step(&mut self) -> Result<Step> {
        let Some(&instr) = self.program.get(self.ip) else {
            return Ok(Step::Halt);
        };
        self.steps += 1;
        trace!(ip = self.ip, cursor = self.tape.cursor(), instr = %(instr as char), "step");

        match instr {
            GREATER => self.shift(Direction::Right)?,
            LESS => self.shift(Direction::Left)?,
            PLUS => self.tape.increment(),
            MINUS => self.tape.decrement(),
            DOT => self.output.write_all(&[self.tape.get()])?,
            COMMA => self.read_cell()?,
            LBRACKET => {
                if self.tape.get() == 0 {
                    let target = skip_forward(self.program, self.ip)?;
                    debug!(from = self.ip, to = target, "skip loop");
                    self.ip = target;
                    return Ok(Step::Continue);
                }
            }
            RBRACKET => {
                if self.tape.get() != 0 {
                    let target = jump_backward(self.program, self.ip)?;
                    trace!(from = self.ip, to = target, "repeat loop");
                    self.ip = target;
                    return Ok(Step::Continue);
                }
            }
            _ => {} // no-op
        }
        self.ip += 1;
        Ok(Step::Continue)
    }

    /// Step until the program halts or an instruction fails. Output is
    /// flushed either way.
    pub fn run(&mut self) -> Result<RunSummary> {
        let result = loop {
            match self.step() {
                Ok(Step::Continue) => {}
                Ok(Step::Halt) => break Ok(self.summary()),
                Err(e) => break Err(e),
            }
        };
        self.output.flush()?;
        result
    }

    fn shift(&mut self, direction: Direction) -> Result<()> {
        match self.tape.shift(direction) {
            Ok(_) => Ok(()),
            Err(e) if self.config.bounds == BoundsPolicy::Permissive => {
                self.bounds_violations += 1;
                debug!(ip = self.ip, error = %e, "discarded cursor move");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    fn read_cell(&mut self) -> Result<()> {
        // Anything the program printed before blocking on input should be visible.
        self.output.flush()?;
        let mut buf = [0u8; 1];
        let read = loop {
            match self.input.read(&mut buf) {
                Ok(n) => break n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        };
        if read == 1 {
            self.tape.set(buf[0]);
        } else {
            match self.config.eof {
                EofBehavior::MaxByte => self.tape.set(u8::MAX),
                EofBehavior::Zero => self.tape.set(0),
                EofBehavior::Unchanged => {}
            }
        }
        Ok(())
    }

    /// Capture the current state. Only meaningful between steps.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tape: self.tape.cells().to_vec(),
            data_cursor: self.tape.cursor(),
            instruction_cursor: self.ip,
        }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            steps: self.steps,
            bounds_violations: self.bounds_violations,
        }
    }

    pub fn tape(&self) -> &Tape {
        &self.tape
    }

    pub fn instruction_cursor(&self) -> usize {
        self.ip
    }

    pub fn data_cursor(&self) -> usize {
        self.tape.cursor()
    }

    pub fn current_cell(&self) -> u8 {
        self.tape.get()
    }
}
