//! The guarded fullscreen transition.
//!
//! One boolean mode, one transition. `change_fullscreen` is the only place
//! `is_fullscreen` is written, and it bails out immediately when asked for
//! the state it is already in, so duplicate requests never double-toggle
//! classes or double-fire the change notification.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::clock::AnimationClock;
use crate::host::CarouselHost;
use crate::options::FullscreenOptions;
use crate::sizing::GallerySizing;
use crate::view_state::ViewStateAdapter;

/// Owns the fullscreen flag and drives transitions against the host
/// carousel.
///
/// Single-threaded by design: the host handle is an `Rc<RefCell<_>>` and the
/// only suspension point is the settle wait, which happens before the flag
/// write. Overlapping calls requesting the same target state are safe; the
/// later one either short-circuits on the flag or redundantly re-enters the
/// wait loop.
pub struct FullscreenController<H, V, C> {
    host: Rc<RefCell<H>>,
    view_state: V,
    clock: C,
    options: FullscreenOptions,
    is_fullscreen: Cell<bool>,
}

impl<H, V, C> FullscreenController<H, V, C>
where
    H: CarouselHost,
    V: ViewStateAdapter,
    C: AnimationClock,
{
    pub fn new(
        host: Rc<RefCell<H>>,
        view_state: V,
        clock: C,
        options: FullscreenOptions,
    ) -> Self {
        Self {
            host,
            view_state,
            clock,
            options,
            is_fullscreen: Cell::new(false),
        }
    }

    /// Current mode. Writable only through [`change_fullscreen`](Self::change_fullscreen).
    pub fn is_fullscreen(&self) -> bool {
        self.is_fullscreen.get()
    }

    pub fn options(&self) -> &FullscreenOptions {
        &self.options
    }

    /// Enter fullscreen, then request focus on the carousel element. Focus
    /// is requested even when the transition was a no-op.
    pub async fn view_fullscreen(&self) {
        self.change_fullscreen(true).await;
        self.host.borrow_mut().focus();
    }

    /// Leave fullscreen. No-op when not fullscreen.
    pub async fn exit_fullscreen(&self) {
        self.change_fullscreen(false).await;
    }

    /// Flip to the opposite mode.
    pub async fn toggle_fullscreen(&self) {
        self.change_fullscreen(!self.is_fullscreen.get()).await;
    }

    /// The guarded transition.
    ///
    /// Re-selects the current slide instantly and silently, waits for any
    /// in-flight animation to settle, then flips the flag, applies the
    /// presentation classes, resizes (plus a reposition pass on entry), and
    /// dispatches `fullscreenChange` with the new state.
    pub async fn change_fullscreen(&self, is_view: bool) {
        if self.is_fullscreen.get() == is_view {
            return;
        }

        // Force onto the current slide before anything else. Entering
        // fullscreen mid-slide-transition leaves animation state
        // inconsistent otherwise.
        {
            let mut host = self.host.borrow_mut();
            let index = host.selected_index();
            host.select(index, true, true);
        }
        self.wait_for_settle().await;

        self.is_fullscreen.set(is_view);
        log::debug!("fullscreen -> {is_view}");
        self.view_state.set_presentation_mode(is_view);

        let mut host = self.host.borrow_mut();
        host.resize();
        if is_view {
            // Image-bearing slides need a full re-layout on entry; a plain
            // resize leaves them with stale offsets. Not needed on exit.
            host.reposition();
        }
        host.dispatch_fullscreen_change(is_view);
    }

    /// Sizing strategy for the host to compose into its gallery-size
    /// routine: full CSS height while fullscreen, the host's own measured
    /// height otherwise.
    pub fn gallery_sizing(&self) -> GallerySizing {
        if self.is_fullscreen.get() {
            GallerySizing::FullHeight
        } else {
            GallerySizing::Measured
        }
    }

    /// Poll until the host's animation flag clears.
    ///
    /// The host exposes no settled notification, so this is a fixed-interval
    /// poll. With `settle_timeout_ms` unset it can wait forever; with it
    /// set, the transition proceeds once the bound elapses.
    async fn wait_for_settle(&self) {
        // A zero interval must still make progress toward the timeout.
        let poll_ms = self.options.settle_poll_ms.max(1);
        let mut waited_ms: u32 = 0;
        while self.host.borrow().is_animating() {
            if let Some(limit) = self.options.settle_timeout_ms {
                if waited_ms >= limit {
                    log::warn!(
                        "slide animation still running after {limit}ms; \
                         continuing fullscreen transition anyway"
                    );
                    break;
                }
            }
            self.clock.sleep(self.options.settle_poll_ms).await;
            waited_ms = waited_ms.saturating_add(poll_ms);
        }
    }
}
