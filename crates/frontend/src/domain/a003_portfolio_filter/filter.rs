use contracts::domain::a003_portfolio_filter::{
    decode_filter_hash, replacement_url, sync_hero, CategorySet, FilterToken, HeroSlide,
};
use contracts::shared::site_config::SiteConfig;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget};

use super::carousel::Carousel;
use crate::shared::dom;

struct Hero {
    carousel: Carousel,
    slides: Vec<HeroSlide>,
}

/// Grid, filter bar and (optional) hero carousel of the portfolio page.
pub struct PortfolioFilter {
    config: SiteConfig,
    items: Vec<Element>,
    bar: Element,
    hero: Option<Hero>,
}

impl PortfolioFilter {
    /// `None` when the page has no filter bar or an empty grid.
    pub fn discover(document: &Document, config: &SiteConfig) -> Result<Option<Self>, JsValue> {
        let items = dom::query_all(document, &config.grid_item_selector)?;
        let Some(bar) = document.query_selector(&config.filter_bar_selector)? else {
            return Ok(None);
        };
        if items.is_empty() {
            return Ok(None);
        }

        let hero = match document.query_selector(&config.hero_selector)? {
            Some(element) => discover_hero(&element, config),
            None => None,
        };
        log::debug!(
            "portfolio filter: {} items, hero slides: {}",
            items.len(),
            hero.as_ref().map_or(0, |h| h.slides.len())
        );

        Ok(Some(Self {
            config: config.clone(),
            items,
            bar,
            hero,
        }))
    }

    pub fn bar(&self) -> &Element {
        &self.bar
    }

    /// Show matching grid items, hide the rest, then mark the current control.
    pub fn apply_filter(&self, token: &FilterToken) {
        for item in &self.items {
            let categories =
                CategorySet::parse(item.get_attribute(&self.config.categories_attr).as_deref());
            dom::toggle_class(item, &self.config.hidden_class, !token.matches(&categories));
        }
        self.set_active(token);
    }

    /// Exactly the control for `token` gets the active class and `aria-current`.
    pub fn set_active(&self, token: &FilterToken) {
        let selector = SiteConfig::attr_selector(&self.config.filter_attr);
        let controls = match dom::query_all_in(&self.bar, &selector) {
            Ok(controls) => controls,
            Err(err) => {
                log::warn!("portfolio filter: controls not found: {:?}", err);
                return;
            }
        };

        for control in controls {
            let active =
                token.is_control_active(control.get_attribute(&self.config.filter_attr).as_deref());
            dom::toggle_class(&control, &self.config.active_class, active);
            let marked = if active {
                control.set_attribute("aria-current", "page")
            } else {
                control.remove_attribute("aria-current")
            };
            if let Err(err) = marked {
                log::warn!("portfolio filter: aria-current not updated: {:?}", err);
            }
        }
    }

    /// Mirror `token` into the URL without adding a history entry.
    pub fn update_hash(&self, token: &FilterToken) {
        if let Err(err) = replace_url(token) {
            log::warn!("portfolio filter: URL not updated: {:?}", err);
        }
    }

    pub fn show_hero(&self, token: &FilterToken) {
        if let Some(hero) = &self.hero {
            let outcome = sync_hero(&hero.carousel, &hero.slides, token);
            log::debug!("portfolio filter: hero {:?} for {:?}", outcome, token.as_str());
        }
    }

    /// Full reaction to a click on a filter control.
    pub fn select(&self, token: &FilterToken) {
        self.apply_filter(token);
        self.update_hash(token);
        self.show_hero(token);
    }

    /// Raw token of the filter control that `target` sits in, if any.
    pub fn control_token(&self, target: EventTarget) -> Option<String> {
        let element = target.dyn_into::<Element>().ok()?;
        let selector = SiteConfig::attr_selector(&self.config.filter_attr);
        let control = element.closest(&selector).ok().flatten()?;
        control.get_attribute(&self.config.filter_attr)
    }
}

fn discover_hero(element: &Element, config: &SiteConfig) -> Option<Hero> {
    let carousel = match Carousel::for_element(element) {
        Ok(carousel) => carousel,
        Err(err) => {
            log::warn!("portfolio filter: hero carousel unavailable: {:?}", err);
            return None;
        }
    };
    let slides = dom::query_all_in(element, &config.hero_slide_selector)
        .unwrap_or_else(|err| {
            log::warn!("portfolio filter: hero slides not found: {:?}", err);
            Vec::new()
        })
        .iter()
        .map(|slide| {
            HeroSlide::from_attributes(
                slide.get_attribute(&config.categories_attr).as_deref(),
                slide.get_attribute(&config.representative_attr).as_deref(),
            )
        })
        .collect();

    Some(Hero { carousel, slides })
}

fn replace_url(token: &FilterToken) -> Result<(), JsValue> {
    let window = dom::window()?;
    let location = window.location();
    let url = replacement_url(&location.pathname()?, &location.search()?, token);
    window
        .history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(&url))
}

/// Filter restored from `location.hash`; `all` when absent or undecodable.
pub fn initial_filter() -> FilterToken {
    let hash = dom::window()
        .and_then(|w| w.location().hash())
        .unwrap_or_default();
    match decode_filter_hash(&hash) {
        Ok(Some(token)) => token,
        Ok(None) => FilterToken::all(),
        Err(err) => {
            log::warn!("portfolio filter: {}, showing all", err);
            FilterToken::all()
        }
    }
}
