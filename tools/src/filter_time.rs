use std::io::{BufRead, Write};

use anyhow::Result;

use crate::{process_lines, sequence_field, LineError, RunSummary, ToolOptions};

/// A line of a timing file is `<sequence> [...] <time>`.
/// Returns the sequence when the search took longer than `min_time`.
pub fn filter_time_line(line: &str, min_time: i64) -> Result<Option<String>, LineError> {
    let move_sequence = sequence_field(line)?;
    let fields = line.split_whitespace().collect::<Vec<_>>();

    if fields.len() < 2 {
        return Err(LineError::malformed(format!(
            "expected a move sequence and a time, found {} field(s)",
            fields.len()
        )));
    }

    let time_field = fields[fields.len() - 1];
    let time = time_field
        .parse::<i64>()
        .map_err(|_| LineError::malformed(format!("time {:?} is not an integer", time_field)))?;

    Ok((time > min_time).then(|| move_sequence.to_string()))
}

pub fn filter_time<R: BufRead, W: Write>(
    reader: R,
    writer: &mut W,
    options: &ToolOptions,
) -> Result<RunSummary> {
    let min_time = options.min_time;

    process_lines(reader, writer, options, |line| {
        Ok(filter_time_line(line, min_time)?.into_iter().collect())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_slow_positions() {
        assert_eq!(
            filter_time_line("3344 5 101", 100).unwrap(),
            Some("3344".to_string())
        );
    }

    #[test]
    fn test_threshold_is_exclusive() {
        assert_eq!(filter_time_line("3344 100", 100).unwrap(), None);
        assert_eq!(filter_time_line("3344 12", 100).unwrap(), None);
    }

    #[test]
    fn test_time_is_the_last_field() {
        assert_eq!(
            filter_time_line("33 1 2 3 4000", 100).unwrap(),
            Some("33".to_string())
        );
    }

    #[test]
    fn test_rejects_missing_time() {
        assert!(matches!(
            filter_time_line("3344", 100),
            Err(LineError::Malformed(_))
        ));
    }

    #[test]
    fn test_rejects_non_numeric_time() {
        assert!(matches!(
            filter_time_line("3344 fast", 100),
            Err(LineError::Malformed(_))
        ));
    }
}
