/// Seam for the presentation-mode side effect.
///
/// Entering and leaving fullscreen flips CSS classes on the document root
/// and on the carousel element. That global DOM mutation goes through this
/// adapter so the controller itself never touches a document, which keeps
/// the transition testable and lets an application serialize access when it
/// runs several carousels.
pub trait ViewStateAdapter {
    /// Apply or clear the fullscreen presentation classes.
    fn set_presentation_mode(&self, is_fullscreen: bool);
}
