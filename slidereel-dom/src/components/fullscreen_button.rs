// slidereel-dom/src/components/fullscreen_button.rs
use std::rc::Rc;

use slidereel_core::ButtonDirection;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Icon geometry per direction: outward arrows for view, inward for exit.
fn icon_path(direction: ButtonDirection) -> &'static str {
    match direction {
        ButtonDirection::View => {
            "M 13 18 L 5 26 h 5 v 1 H 3 V 20 H 4 v 5 l 8 -8 Z \
             m 5 -5 l 8 -8 v 5 h 1 V 3 H 20 V 4 h 5 l -8 8 Z"
        }
        ButtonDirection::Exit => {
            "M 26 4 L 19 11 h 5 v 1 H 17 V 5 h 1 V 10 l 7 -7 z \
             M 4 26 L 11 19 L 11 24 H 12 L 12 17 L 5 17 V 18 H 10 L 3 25 z"
        }
    }
}

/// One directional fullscreen affordance: a labelled icon button whose click
/// runs the action bound at construction time.
///
/// The action closure is captured once; `activate`/`deactivate` only attach
/// and detach the click listener, and both are idempotent.
pub struct FullscreenButton {
    direction: ButtonDirection,
    element: Element,
    action: Rc<dyn Fn()>,
    click_listener: Option<Closure<dyn FnMut(MouseEvent)>>,
}

impl FullscreenButton {
    pub fn new(
        document: &Document,
        direction: ButtonDirection,
        action: Rc<dyn Fn()>,
    ) -> Result<Self, JsValue> {
        let element = document.create_element("button")?;
        // prevent the button from submitting a surrounding form
        element.set_attribute("type", "button")?;
        element.set_attribute(
            "class",
            &format!(
                "slidereel-button slidereel-fullscreen-button \
                 slidereel-fullscreen-button-{}",
                direction.as_str()
            ),
        )?;
        element.set_attribute("aria-label", direction.label())?;
        element.set_attribute("title", direction.label())?;
        element.append_child(&create_icon(document, direction)?.into())?;

        Ok(Self {
            direction,
            element,
            action,
            click_listener: None,
        })
    }

    pub fn direction(&self) -> ButtonDirection {
        self.direction
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Attach the click listener. Does nothing if already attached.
    pub fn activate(&mut self) {
        if self.click_listener.is_some() {
            return;
        }
        let action = Rc::clone(&self.action);
        let closure = Closure::wrap(Box::new(move |_: MouseEvent| action()) as Box<dyn FnMut(_)>);
        if let Err(e) = self
            .element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        {
            log::warn!("failed to attach fullscreen button listener: {e:?}");
            return;
        }
        self.click_listener = Some(closure);
    }

    /// Detach the click listener. Does nothing if already detached.
    pub fn deactivate(&mut self) {
        if let Some(closure) = self.click_listener.take() {
            let _ = self
                .element
                .remove_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        }
    }
}

impl Drop for FullscreenButton {
    fn drop(&mut self) {
        self.deactivate();
    }
}

fn create_icon(document: &Document, direction: ButtonDirection) -> Result<Element, JsValue> {
    let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
    svg.set_attribute("class", "slidereel-button-icon")?;
    svg.set_attribute("viewBox", "0 0 29 29")?;

    let path = document.create_element_ns(Some(SVG_NS), "path")?;
    path.set_attribute("d", icon_path(direction))?;
    path.set_attribute("stroke", "black")?;
    path.set_attribute("stroke-linecap", "round")?;
    path.set_attribute("stroke-linejoin", "round")?;
    path.set_attribute("stroke-width", "1.5")?;

    svg.append_child(&path)?;
    Ok(svg)
}
