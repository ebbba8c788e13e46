use std::future::Future;

use gloo_timers::future::TimeoutFuture;
use slidereel_core::AnimationClock;

/// Animation clock backed by a browser timeout.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomClock;

impl AnimationClock for DomClock {
    fn sleep(&self, ms: u32) -> impl Future<Output = ()> {
        TimeoutFuture::new(ms)
    }
}
