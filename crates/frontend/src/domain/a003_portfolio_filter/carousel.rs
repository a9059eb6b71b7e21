//! Bootstrap's carousel widget behind [`HeroCarousel`].

use contracts::domain::a003_portfolio_filter::HeroCarousel;
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    /// `bootstrap.Carousel` instance bound to the hero element.
    #[wasm_bindgen(js_namespace = bootstrap)]
    pub type Carousel;

    #[wasm_bindgen(static_method_of = Carousel, js_namespace = bootstrap, js_name = getOrCreateInstance, catch)]
    fn get_or_create_instance(element: &Element) -> Result<Carousel, JsValue>;

    #[wasm_bindgen(method, js_name = cycle)]
    fn js_cycle(this: &Carousel);

    #[wasm_bindgen(method, js_name = pause)]
    fn js_pause(this: &Carousel);

    #[wasm_bindgen(method, js_name = to)]
    fn js_to(this: &Carousel, index: u32);
}

impl Carousel {
    /// Existing or fresh widget for `element`. Fails when Bootstrap is not loaded.
    pub fn for_element(element: &Element) -> Result<Carousel, JsValue> {
        Carousel::get_or_create_instance(element)
    }
}

impl HeroCarousel for Carousel {
    fn cycle(&self) {
        self.js_cycle();
    }

    fn pause(&self) {
        self.js_pause();
    }

    fn go_to(&self, index: usize) {
        match slide_position(index) {
            Some(position) => self.js_to(position),
            None => log::warn!("hero carousel: slide {} out of range, not jumping", index),
        }
    }
}

/// Slide index as passed to `Carousel.to`; `None` when it does not fit.
fn slide_position(index: usize) -> Option<u32> {
    u32::try_from(index).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_position() {
        assert_eq!(slide_position(0), Some(0));
        assert_eq!(slide_position(7), Some(7));
        assert_eq!(slide_position(u32::MAX as usize), Some(u32::MAX));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_slide_position_out_of_range() {
        assert_eq!(slide_position(u32::MAX as usize + 1), None);
        assert_eq!(slide_position(usize::MAX), None);
    }
}
