//! Collaborator contract for the host carousel.
//!
//! The carousel's own selection, animation, and layout engine lives outside
//! this workspace. The fullscreen controller only needs the narrow surface
//! below; the host implements it and keeps everything else private.

/// The slice of a carousel the fullscreen controller talks to.
pub trait CarouselHost {
    /// Index of the currently selected slide.
    fn selected_index(&self) -> usize;

    /// Select a slide. `is_instant` skips the transition animation,
    /// `is_suppress_event` skips the selection notification.
    fn select(&mut self, index: usize, is_instant: bool, is_suppress_event: bool);

    /// Whether a slide animation is currently in flight.
    fn is_animating(&self) -> bool;

    /// Whether the carousel is in its active/mounted state.
    fn is_active(&self) -> bool;

    /// Recompute layout after a viewport change.
    fn resize(&mut self);

    /// Full re-layout pass. Needed in addition to [`resize`](Self::resize)
    /// when entering fullscreen, where image-bearing slides keep stale
    /// offsets after a plain resize.
    fn reposition(&mut self);

    /// Request input focus on the carousel element. Idempotent if already
    /// focused.
    fn focus(&mut self);

    /// Emit the `fullscreenChange` notification to the host's listeners.
    fn dispatch_fullscreen_change(&mut self, is_fullscreen: bool);
}
