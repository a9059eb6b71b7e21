use super::category::CategorySet;
use super::filter_token::FilterToken;

/// Attribute value marking a slide as the face of its category.
pub const REPRESENTATIVE_VALUE: &str = "true";

/// The imperative surface of the hero carousel widget.
pub trait HeroCarousel {
    /// Resume automatic cycling.
    fn cycle(&self);
    /// Stop automatic cycling.
    fn pause(&self);
    /// Jump to the slide at `index`.
    fn go_to(&self, index: usize);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroSlide {
    pub categories: CategorySet,
    pub representative: bool,
}

impl HeroSlide {
    /// Build from the raw `data-cats` / `data-rep` attribute values.
    pub fn from_attributes(categories: Option<&str>, representative: Option<&str>) -> Self {
        Self {
            categories: CategorySet::parse(categories),
            representative: representative == Some(REPRESENTATIVE_VALUE),
        }
    }
}

/// Pick the slide to show for `token`: the first representative slide of the
/// category, else the first slide of the category, else none.
pub fn select_slide(slides: &[HeroSlide], token: &FilterToken) -> Option<usize> {
    if token.is_all() {
        return None;
    }
    slides
        .iter()
        .position(|s| s.representative && s.categories.contains(token.as_str()))
        .or_else(|| {
            slides
                .iter()
                .position(|s| s.categories.contains(token.as_str()))
        })
}

/// What [`sync_hero`] did to the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroSync {
    /// No slides; the carousel was left alone.
    Skipped,
    Cycling,
    Jumped(usize),
    /// Paused on whatever slide was showing; nothing matched.
    Held,
}

pub fn sync_hero<C>(carousel: &C, slides: &[HeroSlide], token: &FilterToken) -> HeroSync
where
    C: HeroCarousel + ?Sized,
{
    if slides.is_empty() {
        return HeroSync::Skipped;
    }
    if token.is_all() {
        carousel.cycle();
        return HeroSync::Cycling;
    }

    carousel.pause();
    match select_slide(slides, token) {
        Some(index) => {
            carousel.go_to(index);
            HeroSync::Jumped(index)
        }
        None => HeroSync::Held,
    }
}
