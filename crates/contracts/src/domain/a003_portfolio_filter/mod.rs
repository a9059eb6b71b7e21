pub mod category;
pub mod filter_token;
pub mod hero;
pub mod url_hash;

pub use category::CategorySet;
pub use filter_token::{FilterToken, ALL};
pub use hero::{select_slide, sync_hero, HeroCarousel, HeroSlide, HeroSync};
pub use url_hash::{decode_filter_hash, encode_filter_hash, replacement_url, FilterHashError};
