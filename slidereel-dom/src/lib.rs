//! Browser layer for the slidereel fullscreen module.
//!
//! `slidereel-core` owns the transition logic; this crate supplies the DOM
//! pieces around it: the view/exit buttons, the presentation-mode class
//! toggling, the Escape-key binding, a timer-backed animation clock, and
//! the addon that wires all of it to a host carousel.

pub mod addon;
pub mod clock;
pub mod components;
pub mod gallery_size;
pub mod keyboard;
pub mod options_attr;
pub mod view_state;

pub use addon::FullscreenAddon;
pub use clock::DomClock;
pub use components::FullscreenButton;
pub use gallery_size::apply_gallery_sizing;
pub use keyboard::EscapeBinding;
pub use options_attr::{options_from_attribute, OPTIONS_ATTR};
pub use view_state::DomViewState;

/// Set up panic reporting and console logging. Call once at startup.
pub fn init_logging() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);
}
