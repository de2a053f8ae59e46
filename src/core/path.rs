use crate::config::NormalizeConfig;
use crate::utils::error::{FileError, Result};
use crate::utils::validation::validate_path;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Characters accepted right after `~`. Only the platform separators are
/// stripped; on Unix `~\x` keeps the backslash as part of the file name.
fn is_home_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Resolves `.` and `..` by text alone, without touching the filesystem.
fn clean(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

/// Expands `~` and checks that fixture paths exist.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizeConfig,
}

impl Normalizer {
    pub fn new(config: NormalizeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// Replaces a leading `~` with the home directory.
    ///
    /// The expanded path has `.` and `..` resolved lexically. Paths without
    /// `~` are returned as given. `~user` forms are not supported.
    pub fn expand_home(&self, path: &str) -> Result<PathBuf> {
        let Some(rest) = path.strip_prefix('~') else {
            return Ok(PathBuf::from(path));
        };

        if rest.chars().next().is_some_and(|c| !is_home_separator(c)) {
            return Err(FileError::UserHomeUnsupported {
                path: path.to_string(),
            });
        }

        let home = self.config.resolve_home_dir()?;
        let rest = rest.trim_start_matches(std::path::is_separator);
        Ok(clean(&home.join(rest)))
    }

    /// Trims, expands `~` and verifies the target exists.
    ///
    /// An empty input yields an empty path.
    pub fn normalize(&self, original: &str) -> Result<PathBuf> {
        if original.is_empty() {
            return Ok(PathBuf::new());
        }

        let trimmed = if self.config.trim_whitespace {
            original.trim()
        } else {
            original
        };
        validate_path(trimmed)?;
        let out = self.expand_home(trimmed)?;

        if self.config.require_exists {
            // Only a missing target is an error.
            if let Err(source) = std::fs::metadata(&out) {
                if source.kind() == ErrorKind::NotFound {
                    return Err(FileError::NotFound {
                        original: original.to_string(),
                        source,
                    });
                }
                tracing::debug!("Ignoring stat error for {}: {}", out.display(), source);
            }
        }

        tracing::debug!("Normalized {:?} to {}", original, out.display());
        Ok(out)
    }
}

pub fn normalize_path(path: &str) -> Result<PathBuf> {
    Normalizer::default().normalize(path)
}

pub fn expand_home(path: &str) -> Result<PathBuf> {
    Normalizer::default().expand_home(path)
}
