/// How the gallery viewport height should be computed right now.
///
/// The controller picks a strategy from the current mode and the host
/// composes it into its sizing routine, instead of the controller replacing
/// that routine wholesale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GallerySizing {
    /// Normal mode: the host measures slides and sets an explicit height.
    Measured,
    /// Fullscreen: drop the explicit height so CSS sizes the viewport.
    FullHeight,
}
