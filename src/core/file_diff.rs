//! Byte level file comparison
//!
//! Both files are streamed through buffered readers and compared from offset
//! zero. The scan stops as soon as the requested number of differences has
//! been recorded, so comparing large files that differ early stays cheap.
//!
//! Size mismatches are reported immediately: when the two files do not have
//! the same length no positional differences are enumerated. The check is
//! repeated when one file runs out of content before the other, so files
//! whose reported size does not match what can be read are never equal.

use crate::error::FileError;
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

/// Number of differences recorded by the convenience wrappers.
pub const DEFAULT_MAX_DIFFERENCES: usize = 20;

const BUFFER_SIZE: usize = 64 * 1024;

/// A single mismatching byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiff {
    /// Offset of the mismatch in both files
    pub offset: u64,
    /// Byte found in the first file
    pub left: u8,
    /// Byte found in the second file
    pub right: u8,
}

/// Outcome of [`compare`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileComparison {
    pub equal: bool,
    /// Human readable explanation, empty when the files are equal
    pub reason: String,
    pub differences: Vec<FileDiff>,
}

impl FileComparison {
    fn identical() -> Self {
        Self {
            equal: true,
            reason: String::new(),
            differences: Vec::new(),
        }
    }

    fn failed(reason: String) -> Self {
        Self {
            equal: false,
            reason,
            differences: Vec::new(),
        }
    }
}

struct Scan {
    differences: Vec<FileDiff>,
    stopped_early: bool,
}

/// Compare two files byte by byte, recording at most `max_differences`
/// mismatches. Never fails: open and read errors are reported through
/// `reason` with `equal` set to false.
pub fn compare(
    left: impl AsRef<Path>,
    right: impl AsRef<Path>,
    max_differences: usize,
) -> FileComparison {
    let (left, right) = (left.as_ref(), right.as_ref());
    log::debug!(
        "comparing '{}' with '{}' (max {} differences)",
        left.display(),
        right.display(),
        max_differences
    );

    match scan(left, right, max_differences) {
        Ok(scan) if scan.differences.is_empty() && !scan.stopped_early => {
            FileComparison::identical()
        }
        Ok(scan) => {
            let reason = describe_differences(left, right, &scan, max_differences);
            FileComparison {
                equal: false,
                reason,
                differences: scan.differences,
            }
        }
        Err(err) => {
            log::warn!("file comparison failed: {}", err);
            FileComparison::failed(err.to_string())
        }
    }
}

/// Returns the location of the differences between two files.
///
/// Unlike [`compare`], failures to open or read a file and size mismatches
/// are returned as errors.
pub fn get_file_differences(
    left: impl AsRef<Path>,
    right: impl AsRef<Path>,
    max_differences: usize,
) -> Result<Vec<FileDiff>, FileError> {
    scan(left.as_ref(), right.as_ref(), max_differences).map(|scan| scan.differences)
}

pub fn is_file_equals(left: impl AsRef<Path>, right: impl AsRef<Path>) -> bool {
    compare(left, right, DEFAULT_MAX_DIFFERENCES).equal
}

/// Like [`is_file_equals`] but also returns the textual reason.
pub fn is_file_equals_with_reason(
    left: impl AsRef<Path>,
    right: impl AsRef<Path>,
    max_differences: usize,
) -> (bool, String) {
    let comparison = compare(left, right, max_differences);
    (comparison.equal, comparison.reason)
}

fn open(path: &Path) -> Result<(File, u64), FileError> {
    let file = File::open(path).map_err(|source| FileError::Open {
        path: path.display().to_string(),
        source,
    })?;
    let size = file
        .metadata()
        .map_err(|source| FileError::Read {
            path: path.display().to_string(),
            source,
        })?
        .len();
    Ok((file, size))
}

fn scan(left: &Path, right: &Path, max_differences: usize) -> Result<Scan, FileError> {
    let (left_file, left_size) = open(left)?;
    let (right_file, right_size) = open(right)?;

    if left_size != right_size {
        return Err(FileError::SizeMismatch {
            left: left.display().to_string(),
            left_size,
            right: right.display().to_string(),
            right_size,
        });
    }

    let mut left_reader = BufReader::with_capacity(BUFFER_SIZE, left_file);
    let mut right_reader = BufReader::with_capacity(BUFFER_SIZE, right_file);
    let mut differences = Vec::new();
    let mut offset: u64 = 0;

    loop {
        let left_buf = left_reader.fill_buf().map_err(|source| FileError::Read {
            path: left.display().to_string(),
            source,
        })?;
        let right_buf = right_reader.fill_buf().map_err(|source| FileError::Read {
            path: right.display().to_string(),
            source,
        })?;

        let len = left_buf.len().min(right_buf.len());
        if len == 0 {
            if left_buf.len() != right_buf.len() {
                // Metadata lied about the size (pseudo files, growing files)
                let left_read = offset + drain(&mut left_reader, left)?;
                let right_read = offset + drain(&mut right_reader, right)?;
                return Err(FileError::SizeMismatch {
                    left: left.display().to_string(),
                    left_size: left_read,
                    right: right.display().to_string(),
                    right_size: right_read,
                });
            }
            break;
        }

        for (index, (&l, &r)) in left_buf[..len].iter().zip(&right_buf[..len]).enumerate() {
            if l == r {
                continue;
            }
            if differences.len() < max_differences {
                differences.push(FileDiff {
                    offset: offset + index as u64,
                    left: l,
                    right: r,
                });
            }
            if differences.len() >= max_differences {
                return Ok(Scan {
                    differences,
                    stopped_early: true,
                });
            }
        }

        left_reader.consume(len);
        right_reader.consume(len);
        offset += len as u64;
    }

    Ok(Scan {
        differences,
        stopped_early: false,
    })
}

/// Count the bytes left in `reader`.
fn drain(reader: &mut impl Read, path: &Path) -> Result<u64, FileError> {
    io::copy(reader, &mut io::sink()).map_err(|source| FileError::Read {
        path: path.display().to_string(),
        source,
    })
}

fn describe_differences(left: &Path, right: &Path, scan: &Scan, max_differences: usize) -> String {
    let mut reason = format!(
        "Content of '{}' differs from '{}'",
        left.display(),
        right.display()
    );

    if scan.differences.is_empty() {
        reason.push_str(" (comparison stopped at the first difference)");
        return reason;
    }

    let _ = write!(reason, " at {} location(s):", scan.differences.len());
    for diff in &scan.differences {
        let _ = write!(
            reason,
            " offset {}: 0x{:02X} != 0x{:02X},",
            diff.offset, diff.left, diff.right
        );
    }
    reason.pop();

    if scan.stopped_early {
        let _ = write!(
            reason,
            " (comparison stopped after {} difference(s))",
            max_differences
        );
    }
    reason
}
