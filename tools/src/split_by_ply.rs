use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use connect4::MAX_PLY;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::{decode_line, open_input};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SplitSummary {
    pub lines_read: usize,
    pub lines_ignored: usize,
    /// Number of lines routed to each ply file, index 0 being ply 1.
    pub lines_per_ply: Vec<usize>,
}

/// `<dir>/<file name>_<ply>_ply`
pub fn ply_file_path(out_dir: &Path, file_name: &str, ply: usize) -> PathBuf {
    out_dir.join(format!("{}_{}_ply", file_name, ply))
}

/// Routes each line whose length is exactly `ply` characters to `writers[ply - 1]`.
/// Empty lines, lines longer than [`MAX_PLY`] and lines that are not valid UTF-8 are ignored.
pub fn split_lines<R: BufRead, W: Write>(reader: R, writers: &mut [W]) -> Result<SplitSummary> {
    if writers.len() != MAX_PLY {
        return Err(anyhow!(
            "Expected {} writers, one per ply, found {}",
            MAX_PLY,
            writers.len()
        ));
    }

    let mut summary = SplitSummary {
        lines_read: 0,
        lines_ignored: 0,
        lines_per_ply: vec![0; MAX_PLY],
    };

    for (idx, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes.with_context(|| format!("Failed to read line {}", idx + 1))?;
        summary.lines_read += 1;

        let line = match decode_line(&bytes) {
            Ok(line) => line,
            Err(err) => {
                warn!("Ignoring line {}: {}", idx + 1, err);
                summary.lines_ignored += 1;
                continue;
            }
        };

        let ply = line.chars().count();
        if ply == 0 || ply > MAX_PLY {
            debug!("Ignoring line {} of length {}", idx + 1, ply);
            summary.lines_ignored += 1;
            continue;
        }

        writeln!(writers[ply - 1], "{}", line)?;
        summary.lines_per_ply[ply - 1] += 1;
    }

    for writer in writers.iter_mut() {
        writer.flush()?;
    }

    Ok(summary)
}

/// Splits `input` into one file per ply next to it, or in `out_dir` when given.
///
/// Existing ply files are appended to, not truncated. All ply files are created even when no
/// line has their length.
pub fn split_by_ply(input: &Path, out_dir: Option<&Path>) -> Result<SplitSummary> {
    let file_name = input
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("{:?} does not name a file", input))?;

    let out_dir = match out_dir {
        Some(out_dir) => out_dir.to_path_buf(),
        None => input.parent().map(Path::to_path_buf).unwrap_or_default(),
    };

    let mut writers = (1..=MAX_PLY)
        .map(|ply| -> Result<BufWriter<File>> {
            let path = ply_file_path(&out_dir, file_name, ply);
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open {:?} for appending", path))?;

            Ok(BufWriter::new(file))
        })
        .collect::<Result<Vec<_>>>()?;

    info!("Splitting {:?} into {:?}", input, out_dir);

    split_lines(open_input(input)?, &mut writers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_split_lines_routes_by_length() {
        let mut writers: Vec<Vec<u8>> = vec![Vec::new(); MAX_PLY];

        let summary = split_lines(Cursor::new("3\n33\n4\n\n334\n"), &mut writers).unwrap();

        assert_eq!(writers[0], b"3\n4\n");
        assert_eq!(writers[1], b"33\n");
        assert_eq!(writers[2], b"334\n");
        assert!(writers[3].is_empty());
        assert_eq!(summary.lines_read, 5);
        assert_eq!(summary.lines_ignored, 1);
        assert_eq!(&summary.lines_per_ply[..3], &[2, 1, 1]);
    }

    #[test]
    fn test_split_lines_ignores_overlong_lines() {
        let mut writers: Vec<Vec<u8>> = vec![Vec::new(); MAX_PLY];
        let overlong = "0".repeat(MAX_PLY + 1);

        let summary = split_lines(Cursor::new(overlong), &mut writers).unwrap();

        assert_eq!(summary.lines_ignored, 1);
        assert!(writers.iter().all(|w| w.is_empty()));
    }

    #[test]
    fn test_split_lines_ignores_lines_that_are_not_utf8() {
        let mut writers: Vec<Vec<u8>> = vec![Vec::new(); MAX_PLY];

        let summary =
            split_lines(Cursor::new(&b"33\n\xff\xfe\n334\r\n"[..]), &mut writers).unwrap();

        assert_eq!(writers[1], b"33\n");
        assert_eq!(writers[2], b"334\n");
        assert_eq!(summary.lines_read, 3);
        assert_eq!(summary.lines_ignored, 1);
        assert_eq!(summary.lines_per_ply.iter().sum::<usize>(), 2);
    }

    #[test]
    fn test_split_lines_requires_one_writer_per_ply() {
        let mut writers: Vec<Vec<u8>> = vec![Vec::new(); 3];

        assert!(split_lines(Cursor::new("3\n"), &mut writers).is_err());
    }

    #[test]
    fn test_ply_file_path() {
        assert_eq!(
            ply_file_path(Path::new("out"), "sequences", 12),
            Path::new("out").join("sequences_12_ply")
        );
    }
}
