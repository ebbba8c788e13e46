use slidereel_core::ViewStateAdapter;
use web_sys::{Document, Element};

/// Class applied to the document root while any slidereel is fullscreen.
/// This is the application-level styling hook (fixed positioning, body
/// scroll lock and the like).
pub const ROOT_CLASS: &str = "is-slidereel-fullscreen";

/// Class applied to the carousel element itself.
pub const ELEMENT_CLASS: &str = "is-fullscreen";

/// Applies the presentation-mode classes to a real document.
///
/// The root class is process-wide state; with several carousels on one page
/// the application is expected to keep at most one fullscreen at a time.
pub struct DomViewState {
    document: Document,
    element: Element,
}

impl DomViewState {
    pub fn new(document: Document, element: Element) -> Self {
        Self { document, element }
    }
}

impl ViewStateAdapter for DomViewState {
    fn set_presentation_mode(&self, is_fullscreen: bool) {
        let root = self.document.document_element();
        if is_fullscreen {
            if let Some(root) = &root {
                let _ = root.class_list().add_1(ROOT_CLASS);
            }
            let _ = self.element.class_list().add_1(ELEMENT_CLASS);
        } else {
            if let Some(root) = &root {
                let _ = root.class_list().remove_1(ROOT_CLASS);
            }
            let _ = self.element.class_list().remove_1(ELEMENT_CLASS);
        }
    }
}
