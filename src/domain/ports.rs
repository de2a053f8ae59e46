use std::error::Error;

/// Something that can abort the currently running test.
///
/// `fatal` never returns: implementations panic, exit, or unwind in some
/// other way. Implementations should be `#[track_caller]` so the reported
/// location is the test, not this crate.
pub trait Failer {
    #[track_caller]
    fn fatal(&self, err: &dyn Error) -> !;
}

/// Fails a libtest `#[test]` by panicking with the error message.
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicFailer;

impl Failer for PanicFailer {
    #[track_caller]
    fn fatal(&self, err: &dyn Error) -> ! {
        let location = std::panic::Location::caller();
        tracing::error!("❌ fatal test error at {}: {}", location, err);
        panic!("{}", err)
    }
}
