//! Capability-scoped file reads.
//!
//! The crate does not call `std::fs` directly. Startup inputs (the session
//! key and the principal directory) are read through `cap_std::fs::Dir`
//! opened on the file's parent directory.

use std::io;
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};

/// Read the whole file at `path`.
///
/// # Errors
/// Returns the underlying I/O error, or `InvalidInput` when `path` has no
/// file name component.
pub(crate) fn read_file(path: &Path) -> io::Result<Vec<u8>> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "path must name a file")
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let directory = Dir::open_ambient_dir(parent, ambient_authority())?;
    directory.read(Path::new(file_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use rstest::rstest;

    #[rstest]
    fn reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"contents").expect("write temp file");

        let bytes = read_file(file.path()).expect("read succeeds");
        assert_eq!(bytes, b"contents");
    }

    #[rstest]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let err = read_file(&dir.path().join("absent")).expect_err("file is absent");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[rstest]
    fn rejects_paths_without_a_file_name() {
        let err = read_file(Path::new("/")).expect_err("root has no file name");
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
