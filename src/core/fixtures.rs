//! Test fixture file helpers
//!
//! Small helpers used by tests to create, patch and inspect files on disk.

use crate::error::FileError;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

type Result<T> = std::result::Result<T, FileError>;

const TEXT_FILE_LINES: [&str; 6] = [
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
    "Sed euismod, nulla vel tempor viverra, arcu justo luctus lacus.",
    "Ut fringilla nisl eget magna porta, vitae facilisis urna ornare.",
    "Nam pharetra ipsum at est rhoncus, nec commodo nisl tincidunt.",
    "Curabitur id odio vitae lacus placerat volutpat.",
    "Integer vehicula lectus sit amet dui tristique fermentum.",
];

fn write_error(path: &Path) -> impl FnOnce(std::io::Error) -> FileError + '_ {
    move |source| FileError::Write {
        path: path.display().to_string(),
        source,
    }
}

fn read_error(path: &Path) -> impl FnOnce(std::io::Error) -> FileError + '_ {
    move |source| FileError::Read {
        path: path.display().to_string(),
        source,
    }
}

fn open_error(path: &Path) -> impl FnOnce(std::io::Error) -> FileError + '_ {
    move |source| FileError::Open {
        path: path.display().to_string(),
        source,
    }
}

/// Create a file of `size` bytes where byte `i` holds `i % 256`.
pub fn create_file(path: impl AsRef<Path>, size: u64) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(open_error(path))?;
    let mut writer = BufWriter::new(file);
    for i in 0..size {
        writer.write_all(&[(i % 256) as u8]).map_err(write_error(path))?;
    }
    writer.flush().map_err(write_error(path))?;
    log::debug!("created '{}' ({} bytes)", path.display(), size);
    Ok(())
}

/// Create a small multi-line text file.
pub fn create_text_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut content = TEXT_FILE_LINES.join("\n");
    content.push('\n');
    std::fs::write(path, content).map_err(write_error(path))
}

/// Overwrite the byte at `offset` with `value`.
pub fn change_file_content(path: impl AsRef<Path>, offset: u64, value: u8) -> Result<()> {
    let path = path.as_ref();
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(open_error(path))?;

    let size = file.metadata().map_err(read_error(path))?.len();
    if offset >= size {
        return Err(FileError::OffsetOutOfBounds {
            path: path.display().to_string(),
            offset,
            size,
        });
    }

    file.seek(SeekFrom::Start(offset)).map_err(write_error(path))?;
    file.write_all(&[value]).map_err(write_error(path))?;
    Ok(())
}

/// Find the first occurrence of `value` in a text file.
///
/// Returns the 0-based line number and the 0-based byte offset within that
/// line, or `None` when `value` does not appear.
pub fn find_in_file(path: impl AsRef<Path>, value: &str) -> Result<Option<(usize, usize)>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(open_error(path))?;
    for (line_number, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(read_error(path))?;
        if let Some(column) = line.find(value) {
            return Ok(Some((line_number, column)));
        }
    }
    Ok(None)
}

/// Read a text file line by line, without line terminators.
pub fn get_text_file_content(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(open_error(path))?;
    BufReader::new(file)
        .lines()
        .map(|line| line.map_err(read_error(path)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_file_has_sequential_bytes() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("sequential.bin");

        create_file(&path, 300).expect("Failed to create file");
        let bytes = std::fs::read(&path).expect("Failed to read file");
        assert_eq!(bytes.len(), 300);
        assert_eq!(bytes[0], 0);
        assert_eq!(bytes[255], 255);
        assert_eq!(bytes[256], 0);
        assert_eq!(bytes[299], 43);
    }

    #[test]
    fn test_change_file_content() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("patched.bin");
        create_file(&path, 10).expect("Failed to create file");

        change_file_content(&path, 3, 0xAB).expect("Failed to patch file");
        let bytes = std::fs::read(&path).expect("Failed to read file");
        assert_eq!(bytes, vec![0, 1, 2, 0xAB, 4, 5, 6, 7, 8, 9]);

        let result = change_file_content(&path, 10, 0);
        assert!(matches!(result, Err(FileError::OffsetOutOfBounds { .. })));
    }

    #[test]
    fn test_text_file_content_and_search() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("text.txt");
        create_text_file(&path).expect("Failed to create text file");

        let lines = get_text_file_content(&path).expect("Failed to read text file");
        assert_eq!(lines.len(), TEXT_FILE_LINES.len());
        assert_eq!(lines[0], TEXT_FILE_LINES[0]);

        let found = find_in_file(&path, "pharetra").expect("Failed to search file");
        assert_eq!(found, Some((3, 4)));

        let missing = find_in_file(&path, "not in there").expect("Failed to search file");
        assert_eq!(missing, None);
    }

    #[test]
    fn test_missing_file_errors() {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let path = temp_dir.path().join("missing.txt");

        assert!(matches!(
            get_text_file_content(&path),
            Err(FileError::Open { .. })
        ));
        assert!(matches!(
            find_in_file(&path, "x"),
            Err(FileError::Open { .. })
        ));
    }
}
