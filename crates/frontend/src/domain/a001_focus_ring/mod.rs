//! Show focus outlines only to keyboard users.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use contracts::domain::a001_focus_ring::FocusRing;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::KeyboardEvent;

use crate::shared::{config::load_site_config, dom};

/// Wait for the first Tab press, mark the body, then stop listening.
///
/// Attached before the document finishes parsing, so the tabbing class is
/// read from the site config only when that first Tab arrives.
pub fn init() -> Result<(), JsValue> {
    let window = dom::window()?;

    let ring = Rc::new(Cell::new(FocusRing::new()));
    let registered: Rc<RefCell<Option<js_sys::Function>>> = Rc::default();

    let handler = {
        let registered = registered.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move |event: web_sys::Event| {
            let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            let mut state = ring.get();
            if !state.observe_key(&keyboard_event.key()) {
                return;
            }
            ring.set(state);

            let tabbing_class = load_site_config().tabbing_class;
            match dom::body() {
                Ok(body) => dom::toggle_class(&body, &tabbing_class, true),
                Err(err) => log::warn!("focus ring: {:?}", err),
            }

            if let Some(callback) = registered.borrow_mut().take() {
                if let Err(err) = window.remove_event_listener_with_callback("keydown", &callback) {
                    log::warn!("focus ring: keydown listener not removed: {:?}", err);
                }
            }
            log::debug!("focus ring: keyboard navigation detected");
        }) as Box<dyn FnMut(_)>)
    };

    let callback: js_sys::Function = handler.as_ref().unchecked_ref::<js_sys::Function>().clone();
    window.add_event_listener_with_callback("keydown", &callback)?;
    *registered.borrow_mut() = Some(callback);
    // The listener detaches itself; the closure stays alive with the page.
    handler.forget();

    Ok(())
}
