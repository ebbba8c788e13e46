use slidereel_core::GallerySizing;
use web_sys::HtmlElement;

/// Apply a gallery sizing decision to the viewport element.
///
/// `FullHeight` removes the explicit height style so CSS takes over;
/// `Measured` runs the host's own sizing routine. When the host does not
/// manage gallery size at all (`set_gallery_size` off) nothing happens.
pub fn apply_gallery_sizing(
    viewport: &HtmlElement,
    sizing: GallerySizing,
    set_gallery_size: bool,
    measure: impl FnOnce(),
) {
    if !set_gallery_size {
        return;
    }
    match sizing {
        GallerySizing::FullHeight => {
            let _ = viewport.style().remove_property("height");
        }
        GallerySizing::Measured => measure(),
    }
}
