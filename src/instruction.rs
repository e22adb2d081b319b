pub const LESS: u8 = b'<';
pub const GREATER: u8 = b'>';
pub const PLUS: u8 = b'+';
pub const MINUS: u8 = b'-';
pub const DOT: u8 = b'.';
pub const COMMA: u8 = b',';
pub const LBRACKET: u8 = b'[';
pub const RBRACKET: u8 = b']';

/// Returns true if the byte is one of the eight instructions. Every other
/// byte is a no-op.
pub fn is_instruction(byte: u8) -> bool {
    matches!(
        byte,
        LESS | GREATER | PLUS | MINUS | DOT | COMMA | LBRACKET | RBRACKET
    )
}

/// Count the instructions in a program, skipping comment bytes.
pub fn instruction_count(program: &[u8]) -> usize {
    program.iter().filter(|&&b| is_instruction(b)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_instruction() {
        for &b in b"<>+-.,[]" {
            assert!(is_instruction(b));
        }
        for &b in b"{}# \n\0abc" {
            assert!(!is_instruction(b));
        }
    }

    #[test]
    fn test_instruction_count() {
        assert_eq!(instruction_count(b"++ add two\n[-]"), 5);
        assert_eq!(instruction_count(b""), 0);
    }
}
