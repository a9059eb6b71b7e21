use crate::domain::{a001_focus_ring, a002_lightbox, a003_portfolio_filter};
use crate::shared::{config::load_site_config, dom};

/// Enhance the page.
///
/// The focus ring listens right away; the lightbox and the filter wait for
/// the parsed document. The enhancements are independent: one failing leaves
/// the others (and the page itself) untouched.
pub fn run() {
    if let Err(err) = a001_focus_ring::init() {
        log::warn!("focus ring disabled: {:?}", err);
    }

    let ready = dom::on_ready(|| {
        let config = load_site_config();

        if let Err(err) = a002_lightbox::init(&config) {
            log::warn!("lightbox disabled: {:?}", err);
        }
        if let Err(err) = a003_portfolio_filter::init(&config) {
            log::warn!("portfolio filter disabled: {:?}", err);
        }
    });

    if let Err(err) = ready {
        log::warn!("page enhancements not started: {:?}", err);
    }
}
