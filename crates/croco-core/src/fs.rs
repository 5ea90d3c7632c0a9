use std::fs;
use std::io;
use std::path::Path;

/// Filesystem operations the materializer depends on.
pub trait Filesystem {
    /// Recursively creates `path`; succeeds if it already exists.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Creates or truncates `path` and writes `contents`. Parents are not created.
    fn write(&self, path: &Path, contents: &str) -> io::Result<()>;

    fn exists(&self, path: &Path) -> bool;
}

/// [`Filesystem`] backed by `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn write(&self, path: &Path, contents: &str) -> io::Result<()> {
        fs::write(path, contents)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_create_dir_all_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a/b/c");
        LocalFilesystem.create_dir_all(&dir).unwrap();
        LocalFilesystem.create_dir_all(&dir).unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("out.txt");
        LocalFilesystem.write(&file, "a much longer first version").unwrap();
        LocalFilesystem.write(&file, "short").unwrap();
        assert_eq!(fs::read_to_string(&file).unwrap(), "short");
    }

    #[test]
    fn test_write_does_not_create_parents() {
        let tmp = TempDir::new().unwrap();
        let file = tmp.path().join("missing/out.txt");
        let err = LocalFilesystem.write(&file, "x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
