use std::io::{BufRead, Write};

use anyhow::Result;
use connect4::encode;

use crate::{process_lines, LineError, RunSummary, ToolOptions};

/// Rewrites `<sequence> <value>` as `<012 encoding> <value>`.
pub fn convert_line(line: &str) -> Result<String, LineError> {
    let fields = line.split_whitespace().collect::<Vec<_>>();

    let &[move_sequence, value] = fields.as_slice() else {
        return Err(LineError::malformed(format!(
            "expected a move sequence and a value, found {} fields",
            fields.len()
        )));
    };

    Ok(format!("{} {}", encode(move_sequence)?, value))
}

pub fn convert<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    options: &ToolOptions,
) -> Result<RunSummary> {
    process_lines(reader, writer, options, |line| Ok(vec![convert_line(line)?]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use connect4::MoveError;

    #[test]
    fn test_convert_line() {
        assert_eq!(convert_line("33 -2").unwrap(), "00012000 -2");
        assert_eq!(convert_line("31133365\t1").unwrap(), "02100121200201 1");
    }

    #[test]
    fn test_convert_rejects_single_field() {
        assert!(matches!(convert_line("7"), Err(LineError::Malformed(_))));
    }

    #[test]
    fn test_convert_rejects_extra_fields() {
        assert!(matches!(convert_line("33 1 2"), Err(LineError::Malformed(_))));
    }

    #[test]
    fn test_convert_rejects_bad_moves() {
        assert!(matches!(
            convert_line("3393 0"),
            Err(LineError::Move(MoveError::InvalidMove { ply: 3, found: '9' }))
        ));
    }
}
