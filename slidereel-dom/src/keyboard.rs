use wasm_bindgen::prelude::*;
use web_sys::{EventTarget, KeyboardEvent};

/// Escape-key binding: while installed, pressing Escape with focus inside
/// the target runs the given action (the addon binds `exit_fullscreen`).
///
/// The listener is removed on drop.
pub struct EscapeBinding {
    target: EventTarget,
    listener: Closure<dyn FnMut(KeyboardEvent)>,
}

impl EscapeBinding {
    pub fn install<F>(target: &EventTarget, on_escape: F) -> Result<Self, JsValue>
    where
        F: Fn() + 'static,
    {
        let closure = Closure::wrap(Box::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                on_escape();
            }
        }) as Box<dyn FnMut(_)>);
        target.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;

        Ok(Self {
            target: target.clone(),
            listener: closure,
        })
    }
}

impl Drop for EscapeBinding {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback("keydown", self.listener.as_ref().unchecked_ref());
    }
}
