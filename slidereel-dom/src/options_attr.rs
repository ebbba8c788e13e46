use slidereel_core::FullscreenOptions;
use web_sys::Element;

/// Attribute read by [`options_from_attribute`].
pub const OPTIONS_ATTR: &str = "data-slidereel-fullscreen";

/// Read fullscreen options from the host element's JSON data attribute.
/// Returns defaults when the attribute is absent or fails to parse.
pub fn options_from_attribute(element: &Element) -> FullscreenOptions {
    let Some(json) = element.get_attribute(OPTIONS_ATTR) else {
        return FullscreenOptions::default();
    };

    match serde_json::from_str(&json) {
        Ok(options) => options,
        Err(e) => {
            log::warn!("failed to parse {OPTIONS_ATTR}: {e}");
            FullscreenOptions::default()
        }
    }
}
