pub mod actions;
pub mod aggregate;

pub use actions::LightboxAction;
pub use aggregate::{Direction, Gallery, Group, Lightbox, LightboxState, Slide, TriggerSlot};
