pub mod clock;
pub mod controller;
pub mod direction;
pub mod host;
pub mod options;
pub mod sizing;
pub mod view_state;

pub use clock::AnimationClock;
pub use controller::FullscreenController;
pub use direction::ButtonDirection;
pub use host::CarouselHost;
pub use options::FullscreenOptions;
pub use sizing::GallerySizing;
pub use view_state::ViewStateAdapter;
