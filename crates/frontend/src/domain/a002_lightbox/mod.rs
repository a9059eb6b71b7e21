//! Modal media viewer for `[data-lightbox]` links.

pub mod controller;
pub mod overlay;

use contracts::domain::a002_lightbox::{Gallery, Lightbox};
use contracts::shared::site_config::SiteConfig;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::shared::dom;
use controller::LightboxController;
use overlay::LightboxOverlay;

/// Group the page's triggers, mount the single overlay and wire the triggers.
///
/// Pages without triggers get neither an overlay nor listeners.
pub fn init(config: &SiteConfig) -> Result<(), JsValue> {
    let document = dom::document()?;
    let selector = SiteConfig::attr_selector(&config.lightbox_attr);
    let triggers = dom::query_all(&document, &selector)?;
    if triggers.is_empty() {
        log::debug!("lightbox: no {} triggers, staying inert", selector);
        return Ok(());
    }

    let (gallery, slots) = Gallery::from_triggers(
        triggers
            .iter()
            .map(|t| (t.get_attribute(&config.lightbox_attr), t.get_attribute("href"))),
        &config.default_group,
    );
    log::debug!(
        "lightbox: {} triggers in {} groups",
        gallery.trigger_count(),
        gallery.groups().len()
    );

    let config = config.clone();
    leptos::mount::mount_to_body(move || {
        let controller = LightboxController::new(Lightbox::new(gallery));
        for (trigger, slot) in triggers.iter().zip(slots) {
            if let Err(err) = controller.bind_trigger(trigger, slot) {
                log::warn!("lightbox: trigger not wired: {:?}", err);
            }
        }

        view! { <LightboxOverlay controller=controller config=config /> }
    });

    Ok(())
}
