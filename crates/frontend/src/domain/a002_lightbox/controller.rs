use contracts::domain::a002_lightbox::{Direction, Lightbox, LightboxAction, Slide, TriggerSlot};
use leptos::prelude::*;
use wasm_bindgen::JsValue;
use web_sys::Element;

use crate::shared::dom;

/// The page's lightbox. Open, close and navigate are its only mutators.
#[derive(Clone, Copy)]
pub struct LightboxController {
    lightbox: RwSignal<Lightbox>,
}

impl LightboxController {
    pub fn new(lightbox: Lightbox) -> Self {
        Self {
            lightbox: RwSignal::new(lightbox),
        }
    }

    pub fn open(&self, slot: TriggerSlot) {
        self.lightbox.update(|lb| {
            if !lb.open(slot) {
                log::warn!("lightbox: slot {:?} outside the gallery", slot);
            }
        });
    }

    pub fn close(&self) {
        self.lightbox.update(Lightbox::close);
    }

    pub fn navigate(&self, direction: Direction) {
        self.lightbox.update(|lb| {
            lb.navigate(direction);
        });
    }

    /// Apply the keyboard command for `key`, if any. Returns whether one applied.
    pub fn handle_key(&self, key: &str) -> bool {
        let action = self
            .lightbox
            .with_untracked(|lb| LightboxAction::from_key(key, lb));
        match action {
            Some(action) => {
                self.lightbox.update(|lb| lb.apply(action));
                true
            }
            None => false,
        }
    }

    /// Tracked: use inside views and effects.
    pub fn is_open(&self) -> bool {
        self.lightbox.with(Lightbox::is_open)
    }

    /// Tracked: use inside views and effects.
    pub fn slide(&self) -> Option<Slide> {
        self.lightbox.with(Lightbox::current)
    }

    /// Clicking `trigger` opens the lightbox at `slot` instead of following the link.
    pub fn bind_trigger(&self, trigger: &Element, slot: TriggerSlot) -> Result<(), JsValue> {
        let this = *self;
        dom::listen(trigger, "click", move |event| {
            event.prevent_default();
            this.open(slot);
        })
    }
}
