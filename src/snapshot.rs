use crate::error::SnapshotError;

/// Header identifying a serialized snapshot (format version 1).
const MAGIC: &[u8; 8] = b"BFSNAP\0\x01";

const HEADER_LEN: usize = MAGIC.len() + 3 * 8;

/// Interpreter state captured at an instruction boundary.
///
/// Restoring a snapshot and feeding it the same remaining input reproduces
/// the output the original run would have produced from that point on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub tape: Vec<u8>,
    pub data_cursor: usize,
    pub instruction_cursor: usize,
}

impl Snapshot {
    /// Encode as magic, instruction cursor, data cursor, tape length
    /// (little-endian u64 each), then the raw tape.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.tape.len());
        out.extend_from_slice(MAGIC);
        out.extend_from_slice(&(self.instruction_cursor as u64).to_le_bytes());
        out.extend_from_slice(&(self.data_cursor as u64).to_le_bytes());
        out.extend_from_slice(&(self.tape.len() as u64).to_le_bytes());
        out.extend_from_slice(&self.tape);
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        if bytes.len() < MAGIC.len() {
            return Err(SnapshotError::Truncated);
        }
        let (magic, rest) = bytes.split_at(MAGIC.len());
        if magic != MAGIC {
            return Err(SnapshotError::BadMagic);
        }
        let (instruction_cursor, rest) = read_u64(rest)?;
        let (data_cursor, rest) = read_u64(rest)?;
        let (tape_len, tape) = read_u64(rest)?;

        if tape_len == 0 {
            return Err(SnapshotError::EmptyTape);
        }
        if tape.len() != tape_len {
            return Err(SnapshotError::LengthMismatch {
                expected: tape_len,
                actual: tape.len(),
            });
        }
        if data_cursor >= tape_len {
            return Err(SnapshotError::DataCursorOutOfRange {
                cursor: data_cursor,
                len: tape_len,
            });
        }

        Ok(Self {
            tape: tape.to_vec(),
            data_cursor,
            instruction_cursor,
        })
    }
}

fn read_u64(bytes: &[u8]) -> Result<(usize, &[u8]), SnapshotError> {
    let (head, rest) = bytes
        .split_first_chunk::<8>()
        .ok_or(SnapshotError::Truncated)?;
    let value =
        usize::try_from(u64::from_le_bytes(*head)).map_err(|_| SnapshotError::Truncated)?;
    Ok((value, rest))
}
