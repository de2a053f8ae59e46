pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::NormalizeConfig;
pub use core::file::{as_bytes, as_bytes_or_fail, as_string, as_string_or_fail};
pub use core::path::{expand_home, normalize_path, Normalizer};
pub use domain::{Failer, PanicFailer};
pub use utils::error::{FileError, Result};
