use crate::utils::error::{FileError, Result};
use crate::utils::validation::{validate_home_dir, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for [`crate::Normalizer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeConfig {
    /// Overrides the home directory used for `~` expansion.
    pub home_dir: Option<PathBuf>,
    pub trim_whitespace: bool,
    pub require_exists: bool,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            home_dir: None,
            trim_whitespace: true,
            require_exists: true,
        }
    }
}

impl NormalizeConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| FileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| FileError::Config {
            message: format!("TOML parsing error: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home.into());
        self
    }

    /// Explicit override first, then the platform lookup.
    pub fn resolve_home_dir(&self) -> Result<PathBuf> {
        match &self.home_dir {
            Some(home) => Ok(home.clone()),
            None => dirs::home_dir().ok_or(FileError::HomeDirUnavailable),
        }
    }
}

impl Validate for NormalizeConfig {
    fn validate(&self) -> Result<()> {
        if let Some(home) = &self.home_dir {
            validate_home_dir("home_dir", home)?;
        }
        Ok(())
    }
}
