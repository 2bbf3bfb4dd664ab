use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{LineError, OnInvalid, ToolOptions};

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub lines_read: usize,
    pub lines_written: usize,
    pub lines_skipped: usize,
}

pub fn open_input(path: impl AsRef<Path>) -> Result<BufReader<File>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("Failed to open {:?} for reading", path))?;

    Ok(BufReader::new(file))
}

pub fn create_output(path: impl AsRef<Path>) -> Result<BufWriter<File>> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Failed to create {:?}", path))?;

    Ok(BufWriter::new(file))
}

/// Guards against truncating the input by creating the output over it.
pub fn ensure_distinct(input: &Path, output: &Path) -> Result<()> {
    if input == output {
        Err(anyhow!("{:?} is both the input and the output file", input))
    } else {
        Ok(())
    }
}

/// Returns the move sequence, which is always the first whitespace separated field.
pub fn sequence_field(line: &str) -> Result<&str, LineError> {
    line.split_whitespace()
        .next()
        .ok_or_else(|| LineError::malformed("empty line"))
}

/// Turns one raw line, without its `\n`, into text. A trailing `\r` is dropped.
pub fn decode_line(bytes: &[u8]) -> Result<&str, LineError> {
    let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);

    std::str::from_utf8(bytes).map_err(|err| {
        LineError::malformed(format!("not valid UTF-8 at byte {}", err.valid_up_to()))
    })
}

/// Feeds every line of `reader` to `handle` and writes the lines it returns to `writer`.
///
/// Line endings are stripped before `handle` sees a line and `\n` is appended to every output
/// line. A line that `handle` rejects, or that is not valid UTF-8, either aborts the run or is
/// skipped, per `on_invalid`.
pub fn process_lines<R, W, F>(
    reader: R,
    writer: &mut W,
    options: &ToolOptions,
    mut handle: F,
) -> Result<RunSummary>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> Result<Vec<String>, LineError>,
{
    let mut summary = RunSummary::default();

    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let line_number = idx + 1;
        let bytes = bytes.with_context(|| format!("Failed to read line {}", line_number))?;
        summary.lines_read += 1;

        let output_lines = match decode_line(&bytes).and_then(|line| handle(line)) {
            Ok(output_lines) => output_lines,
            Err(err) => match options.on_invalid {
                OnInvalid::Fail => {
                    return Err(anyhow::Error::new(err).context(format!(
                        "Line {}: {:?}",
                        line_number,
                        String::from_utf8_lossy(&bytes)
                    )));
                }
                OnInvalid::Skip => {
                    warn!(
                        "Skipping line {} {:?}: {}",
                        line_number,
                        String::from_utf8_lossy(&bytes),
                        err
                    );
                    summary.lines_skipped += 1;
                    continue;
                }
            },
        };

        for output_line in output_lines {
            writeln!(writer, "{}", output_line)?;
            summary.lines_written += 1;

            debug!("{} sequences written", summary.lines_written);
            if options.progress_interval != 0
                && summary.lines_written % options.progress_interval == 0
            {
                info!("{} sequences written", summary.lines_written);
            }
        }
    }

    writer.flush()?;

    Ok(summary)
}
