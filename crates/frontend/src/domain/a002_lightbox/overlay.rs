use contracts::domain::a002_lightbox::Direction;
use contracts::shared::site_config::SiteConfig;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::KeyboardEvent;

use super::controller::LightboxController;
use crate::shared::dom;

#[component]
pub fn LightboxOverlay(
    /// The page's lightbox
    controller: LightboxController,
    /// Class names for the overlay parts
    config: SiteConfig,
) -> impl IntoView {
    // Escape / arrows while open
    Effect::new(move |_| {
        let listening = dom::window().and_then(|window| {
            dom::listen(&window, "keydown", move |event| {
                if let Some(keyboard_event) = event.dyn_ref::<KeyboardEvent>() {
                    controller.handle_key(&keyboard_event.key());
                }
            })
        });
        if let Err(err) = listening {
            log::warn!("lightbox: keyboard disabled: {:?}", err);
        }
    });

    // Lock page scrolling while open; leave the body alone until first opened
    Effect::new(move |was_open: Option<bool>| {
        let open = controller.is_open();
        if open || was_open.is_some() {
            if let Ok(body) = dom::body() {
                let overflow = if open { "hidden" } else { "" };
                if let Err(err) = body.style().set_property("overflow", overflow) {
                    log::warn!("lightbox: scroll lock not applied: {:?}", err);
                }
            }
        }
        open
    });

    // Only clicks on the backdrop itself close; image and buttons don't
    let backdrop = NodeRef::<html::Div>::new();
    let handle_backdrop_click = move |event: ev::MouseEvent| {
        let on_backdrop = match (event.target(), backdrop.get_untracked()) {
            (Some(target), Some(node)) => JsValue::from(target) == JsValue::from(node),
            _ => false,
        };
        if on_backdrop {
            controller.close();
        }
    };

    let nav_display = move || {
        let show_nav = controller.slide().is_some_and(|slide| slide.show_nav);
        if show_nav {
            ""
        } else {
            "none"
        }
    };

    let SiteConfig {
        overlay_class,
        image_class,
        close_class,
        prev_class,
        next_class,
        open_class,
        ..
    } = config;

    let backdrop_class = move || {
        if controller.is_open() {
            format!("{} {}", overlay_class, open_class)
        } else {
            overlay_class.clone()
        }
    };

    view! {
        <div node_ref=backdrop class=backdrop_class on:click=handle_backdrop_click>
            <img
                class=image_class
                alt="Media preview"
                src=move || controller.slide().and_then(|slide| slide.href)
            />
            <button class=close_class aria-label="Close" on:click=move |_| controller.close()>
                "×"
            </button>
            <button
                class=prev_class
                aria-label="Previous"
                style:display=nav_display
                on:click=move |_| controller.navigate(Direction::Prev)
            >
                "‹"
            </button>
            <button
                class=next_class
                aria-label="Next"
                style:display=nav_display
                on:click=move |_| controller.navigate(Direction::Next)
            >
                "›"
            </button>
        </div>
    }
}
