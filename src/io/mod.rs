use std::fs;
use std::path::Path;

use crate::core::{Error, Result};

pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| Error::file_system_with_source("failed to read file", path, e))
}

pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::file_system_with_source("failed to write file", path, e))
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.as_os_str().is_empty() && !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

pub fn file_exists(path: &Path) -> bool {
    path.exists() && path.is_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_then_read_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("note.txt");
        write_file(&path, "hello").unwrap();
        assert!(file_exists(&path));
        assert_eq!(read_file(&path).unwrap(), "hello");
    }

    #[test]
    fn read_missing_file_reports_path() {
        let dir = TempDir::new().unwrap();
        let err = read_file(&dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, Error::FileSystem { path: Some(_), .. }));
    }

    #[test]
    fn ensure_dir_accepts_empty_parent() {
        // Path::new("canvas.md").parent() is Some("")
        assert!(ensure_dir(Path::new("")).is_ok());
    }
}
