pub mod file;
pub mod path;
