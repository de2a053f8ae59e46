use crate::domain::Failer;
use crate::utils::error::{FileError, Result};
use std::path::Path;

/// Reads the whole file into memory.
pub fn as_bytes<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let path = path.as_ref();
    tracing::debug!("Reading {}", path.display());
    std::fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Like [`as_bytes`], but fails the test on error.
#[track_caller]
pub fn as_bytes_or_fail<F, P>(t: &F, path: P) -> Vec<u8>
where
    F: Failer + ?Sized,
    P: AsRef<Path>,
{
    match as_bytes(path) {
        Ok(content) => content,
        Err(e) => t.fatal(&e),
    }
}

/// Reads the whole file as UTF-8 text.
pub fn as_string<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = as_bytes(path)?;
    String::from_utf8(bytes).map_err(|source| FileError::Utf8 {
        path: path.to_path_buf(),
        source,
    })
}

#[track_caller]
pub fn as_string_or_fail<F, P>(t: &F, path: P) -> String
where
    F: Failer + ?Sized,
    P: AsRef<Path>,
{
    match as_string(path) {
        Ok(content) => content,
        Err(e) => t.fatal(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PanicFailer;
    use std::cell::RefCell;
    use tempfile::TempDir;

    /// Records the message and then unwinds, so the caller never sees a value.
    struct RecordingFailer {
        messages: RefCell<Vec<String>>,
    }

    impl Failer for RecordingFailer {
        fn fatal(&self, err: &dyn std::error::Error) -> ! {
            self.messages.borrow_mut().push(err.to_string());
            panic!("recorded");
        }
    }

    #[test]
    fn test_as_bytes_reads_binary_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("blob.bin");
        std::fs::write(&path, [0u8, 159, 146, 150, 255]).unwrap();

        assert_eq!(as_bytes(&path).unwrap(), vec![0u8, 159, 146, 150, 255]);
    }

    #[test]
    fn test_as_bytes_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");

        match as_bytes(&path) {
            Err(FileError::Read { path: p, source }) => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_as_string_rejects_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("latin1.txt");
        std::fs::write(&path, [b'c', b'a', b'f', 0xE9]).unwrap();

        assert!(matches!(as_string(&path), Err(FileError::Utf8 { .. })));
    }

    #[test]
    fn test_or_fail_returns_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ok.txt");
        std::fs::write(&path, "hello").unwrap();

        assert_eq!(as_string_or_fail(&PanicFailer, &path), "hello");
        assert_eq!(as_bytes_or_fail(&PanicFailer, &path), b"hello");
    }

    #[test]
    fn test_or_fail_hands_error_to_failer() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.txt");
        let failer = RecordingFailer {
            messages: RefCell::new(Vec::new()),
        };

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            as_string_or_fail(&failer, &path)
        }));

        assert!(result.is_err());
        let messages = failer.messages.borrow();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("missing.txt"));
    }
}
