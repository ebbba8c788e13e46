use std::future::Future;

/// Cooperative delay used by the settle-wait loop.
///
/// The browser implementation backs this with a timeout future; tests
/// substitute a clock that advances mock animation state instead.
pub trait AnimationClock {
    /// Yield for roughly `ms` milliseconds without blocking the thread.
    fn sleep(&self, ms: u32) -> impl Future<Output = ()>;
}
