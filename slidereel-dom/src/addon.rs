//! Wiring between a host carousel and the fullscreen controller.
//!
//! The addon owns the controller, the two buttons, and the Escape binding.
//! The host constructs it once and calls [`FullscreenAddon::sync_active`]
//! from its `activate`/`deactivate` lifecycle events; everything else runs
//! off the buttons and the keyboard.

use std::cell::RefCell;
use std::rc::Rc;

use slidereel_core::{ButtonDirection, CarouselHost, FullscreenController, FullscreenOptions};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, HtmlElement};

use crate::clock::DomClock;
use crate::components::FullscreenButton;
use crate::gallery_size::apply_gallery_sizing;
use crate::keyboard::EscapeBinding;
use crate::view_state::DomViewState;

/// Controller specialized to the browser adapters.
pub type DomController<H> = FullscreenController<H, DomViewState, DomClock>;

struct Buttons {
    view: FullscreenButton,
    exit: FullscreenButton,
}

/// Fullscreen support for one carousel instance.
pub struct FullscreenAddon<H: CarouselHost + 'static> {
    host: Rc<RefCell<H>>,
    element: Element,
    controller: Rc<DomController<H>>,
    /// `None` when the feature is disabled in options.
    buttons: Option<Buttons>,
    _escape: Option<EscapeBinding>,
    attached: bool,
}

impl<H: CarouselHost + 'static> FullscreenAddon<H> {
    /// Build the addon for `element`, the carousel's root element.
    ///
    /// With `options.enabled` false only the controller is created: the
    /// transition methods stay callable but no buttons or key bindings
    /// ever appear.
    pub fn new(
        host: Rc<RefCell<H>>,
        element: Element,
        options: FullscreenOptions,
    ) -> Result<Self, JsValue> {
        let document = element
            .owner_document()
            .ok_or_else(|| JsValue::from_str("carousel element has no owner document"))?;

        let enabled = options.enabled;
        let view_state = DomViewState::new(document.clone(), element.clone());
        let controller = Rc::new(FullscreenController::new(
            Rc::clone(&host),
            view_state,
            DomClock,
            options,
        ));

        let (buttons, escape) = if enabled {
            let view = FullscreenButton::new(
                &document,
                ButtonDirection::View,
                bind_action(&controller, |c| async move { c.view_fullscreen().await }),
            )?;
            let exit = FullscreenButton::new(
                &document,
                ButtonDirection::Exit,
                bind_action(&controller, |c| async move { c.exit_fullscreen().await }),
            )?;

            let escape_controller = Rc::clone(&controller);
            let escape = EscapeBinding::install(&element, move || {
                let controller = Rc::clone(&escape_controller);
                spawn_local(async move {
                    controller.exit_fullscreen().await;
                });
            })?;

            (Some(Buttons { view, exit }), Some(escape))
        } else {
            (None, None)
        };

        Ok(Self {
            host,
            element,
            controller,
            buttons,
            _escape: escape,
            attached: false,
        })
    }

    pub fn controller(&self) -> Rc<DomController<H>> {
        Rc::clone(&self.controller)
    }

    pub fn is_fullscreen(&self) -> bool {
        self.controller.is_fullscreen()
    }

    /// Mirror the host's active state: mount and enable both buttons while
    /// the carousel is active, unmount and disable them while it is not.
    /// Safe to call repeatedly; same-direction calls are no-ops.
    pub fn sync_active(&mut self) -> Result<(), JsValue> {
        let Some(buttons) = self.buttons.as_mut() else {
            return Ok(());
        };
        let is_active = self.host.borrow().is_active();
        if is_active == self.attached {
            return Ok(());
        }

        if is_active {
            self.element.append_child(buttons.view.element())?;
            self.element.append_child(buttons.exit.element())?;
            buttons.view.activate();
            buttons.exit.activate();
        } else {
            let _ = self.element.remove_child(buttons.view.element());
            let _ = self.element.remove_child(buttons.exit.element());
            buttons.view.deactivate();
            buttons.exit.deactivate();
        }
        self.attached = is_active;
        Ok(())
    }

    /// Size the gallery viewport according to the current mode, using the
    /// host's own `measure` routine outside fullscreen.
    pub fn apply_gallery_size(&self, viewport: &HtmlElement, measure: impl FnOnce()) {
        apply_gallery_sizing(
            viewport,
            self.controller.gallery_sizing(),
            self.controller.options().set_gallery_size,
            measure,
        );
    }
}

/// Capture one controller action as a `'static` closure for a button.
fn bind_action<H, Fut>(
    controller: &Rc<DomController<H>>,
    action: impl Fn(Rc<DomController<H>>) -> Fut + 'static,
) -> Rc<dyn Fn()>
where
    H: CarouselHost + 'static,
    Fut: std::future::Future<Output = ()> + 'static,
{
    let controller = Rc::clone(controller);
    Rc::new(move || {
        spawn_local(action(Rc::clone(&controller)));
    })
}
