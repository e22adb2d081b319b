//! Live bracket matching.
//!
//! Matching is a scan over the program text on every loop crossing; no
//! table is built ahead of time. Both scans track nesting depth starting
//! at 1 and stop the moment it reaches 0.

use crate::error::{ExecError, Result};
use crate::instruction::{LBRACKET, RBRACKET};

/// Find the `]` matching the `[` at `open` and return the position just
/// past it.
pub fn skip_forward(program: &[u8], open: usize) -> Result<usize> {
    let mut depth: usize = 1;
    let mut ip = open;
    while depth > 0 {
        ip += 1;
        match program.get(ip) {
            Some(&LBRACKET) => depth += 1,
            Some(&RBRACKET) => depth -= 1,
            Some(_) => {}
            None => {
                return Err(ExecError::MalformedProgram {
                    position: open,
                    symbol: '[',
                });
            }
        }
    }
    Ok(ip + 1)
}

/// Find the `[` matching the `]` at `close` and return its position.
pub fn jump_backward(program: &[u8], close: usize) -> Result<usize> {
    let mut depth: usize = 1;
    let mut ip = close;
    while depth > 0 {
        if ip == 0 {
            return Err(ExecError::MalformedProgram {
                position: close,
                symbol: ']',
            });
        }
        ip -= 1;
        match program[ip] {
            RBRACKET => depth += 1,
            LBRACKET => depth -= 1,
            _ => {}
        }
    }
    Ok(ip)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skip_forward_simple() {
        // "[-]." : past the ']' is the '.' at 3.
        assert_eq!(skip_forward(b"[-].", 0).unwrap(), 3);
    }

    #[test]
    fn test_skip_forward_nested() {
        let program = b"[[[]]+]x";
        assert_eq!(skip_forward(program, 0).unwrap(), 7);
        assert_eq!(skip_forward(program, 1).unwrap(), 5);
        assert_eq!(skip_forward(program, 2).unwrap(), 4);
    }

    #[test]
    fn test_skip_forward_can_land_on_end() {
        let program = b"+[-]";
        assert_eq!(skip_forward(program, 1).unwrap(), program.len());
    }

    #[test]
    fn test_jump_backward_nested() {
        let program = b"[[[]]+]x";
        assert_eq!(jump_backward(program, 6).unwrap(), 0);
        assert_eq!(jump_backward(program, 4).unwrap(), 1);
        assert_eq!(jump_backward(program, 3).unwrap(), 2);
    }

    #[test]
    fn test_comments_are_ignored() {
        let program = b"[ a (b) c ]";
        assert_eq!(skip_forward(program, 0).unwrap(), program.len());
        assert_eq!(jump_backward(program, program.len() - 1).unwrap(), 0);
    }

    #[test]
    fn test_unmatched_open_bracket() {
        let err = skip_forward(b"+[[-]", 1).unwrap_err();
        assert!(matches!(
            err,
            ExecError::MalformedProgram {
                position: 1,
                symbol: '['
            }
        ));
    }

    #[test]
    fn test_unmatched_close_bracket() {
        let err = jump_backward(b"[-]]", 3).unwrap_err();
        assert!(matches!(
            err,
            ExecError::MalformedProgram {
                position: 3,
                symbol: ']'
            }
        ));
    }

    #[test]
    fn test_close_bracket_at_start() {
        assert!(jump_backward(b"]", 0).is_err());
    }
}
