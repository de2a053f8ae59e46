use crate::utils::error::{FileError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Rejects paths the OS cannot represent.
pub fn validate_path(path: &str) -> Result<()> {
    if path.contains('\0') {
        return Err(FileError::InvalidPath {
            path: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }
    Ok(())
}

pub fn validate_home_dir(field_name: &str, home: &Path) -> Result<()> {
    if home.as_os_str().is_empty() {
        return Err(FileError::Config {
            message: format!("{}: home directory cannot be empty", field_name),
        });
    }

    match home.to_str() {
        Some(s) if s.contains('\0') => Err(FileError::Config {
            message: format!("{}: home directory contains null bytes", field_name),
        }),
        _ => Ok(()),
    }
}
