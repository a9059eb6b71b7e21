pub mod aggregate;

pub use aggregate::{FocusMode, FocusRing, TAB_KEY};
