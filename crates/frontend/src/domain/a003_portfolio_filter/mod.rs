//! Category filter for the portfolio grid, synced with the hero carousel
//! and the `#filter=` fragment.

pub mod carousel;
pub mod filter;

use std::rc::Rc;

use contracts::domain::a003_portfolio_filter::FilterToken;
use contracts::shared::site_config::SiteConfig;
use wasm_bindgen::JsValue;

use crate::shared::dom;
use filter::PortfolioFilter;

/// Wire the filter bar and restore the filter from the URL.
pub fn init(config: &SiteConfig) -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(filter) = PortfolioFilter::discover(&document, config)? else {
        log::debug!("portfolio filter: no grid or filter bar, staying inert");
        return Ok(());
    };
    let filter = Rc::new(filter);

    let initial = filter::initial_filter();
    filter.apply_filter(&initial);
    filter.show_hero(&initial);

    let bar = filter.bar().clone();
    dom::listen(&bar, "click", move |event| {
        let Some(raw) = event.target().and_then(|t| filter.control_token(t)) else {
            return;
        };
        event.prevent_default();
        filter.select(&FilterToken::new(Some(&raw)));
    })
}
