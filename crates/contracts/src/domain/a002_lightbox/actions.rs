use super::aggregate::{Direction, Lightbox};

/// Keyboard command for an open lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxAction {
    Close,
    Navigate(Direction),
}

impl LightboxAction {
    /// Map a `KeyboardEvent.key`. Closed lightboxes ignore every key.
    pub fn from_key(key: &str, lightbox: &Lightbox) -> Option<Self> {
        if !lightbox.is_open() {
            return None;
        }
        match key {
            "Escape" => Some(Self::Close),
            "ArrowRight" if lightbox.has_many() => Some(Self::Navigate(Direction::Next)),
            "ArrowLeft" if lightbox.has_many() => Some(Self::Navigate(Direction::Prev)),
            _ => None,
        }
    }
}

impl Lightbox {
    pub fn apply(&mut self, action: LightboxAction) {
        match action {
            LightboxAction::Close => self.close(),
            LightboxAction::Navigate(direction) => {
                self.navigate(direction);
            }
        }
    }
}
