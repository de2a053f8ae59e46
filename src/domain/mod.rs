pub mod ports;

pub use ports::{Failer, PanicFailer};
