use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use super::error::Result;

/// Read text from `path`, or from stdin when no path (or `-`) is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            debug!("Reading input from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        _ => {
            debug!("Reading input from stdin");
            read_from(io::stdin().lock())
        }
    }
}

/// Read everything from `reader` as UTF-8 text
pub fn read_from(mut reader: impl Read) -> Result<String> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::infrastructure::error::AppError;

    #[test]
    fn test_read_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        fs::write(&path, "héllo\r\nworld").unwrap();

        assert_eq!(read_input(Some(&path)).unwrap(), "héllo\r\nworld");
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(Some(&dir.path().join("nope.txt"))).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_read_from_reader() {
        let text = read_from("some text".as_bytes()).unwrap();
        assert_eq!(text, "some text");
    }

    #[test]
    fn test_read_invalid_utf8() {
        let err = read_from(&[0xff, 0xfe, 0x00][..]).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
