/// `KeyboardEvent.key` value that switches the page into keyboard mode.
pub const TAB_KEY: &str = "Tab";

/// How the visitor is driving focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusMode {
    #[default]
    Pointer,
    Keyboard,
}

/// One-way switch from pointer to keyboard focus.
///
/// Once keyboard mode is reached it stays for the rest of the session;
/// pointer input never switches it back.
#[derive(Debug, Clone, Copy, Default)]
pub struct FocusRing {
    mode: FocusMode,
}

impl FocusRing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a key press. Returns `true` only for the press that flips the
    /// ring into keyboard mode.
    pub fn observe_key(&mut self, key: &str) -> bool {
        if self.mode == FocusMode::Keyboard || key != TAB_KEY {
            return false;
        }
        self.mode = FocusMode::Keyboard;
        true
    }

    pub fn mode(&self) -> FocusMode {
        self.mode
    }

    pub fn is_keyboard(&self) -> bool {
        self.mode == FocusMode::Keyboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tab_switches_once() {
        let mut ring = FocusRing::new();
        assert!(!ring.is_keyboard());
        assert!(ring.observe_key("Tab"));
        assert!(ring.is_keyboard());
        assert!(!ring.observe_key("Tab"));
        assert_eq!(ring.mode(), FocusMode::Keyboard);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut ring = FocusRing::new();
        for key in ["Enter", "Escape", "a", "tab", "Shift"] {
            assert!(!ring.observe_key(key));
        }
        assert_eq!(ring.mode(), FocusMode::Pointer);
    }
}
