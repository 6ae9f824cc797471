#![allow(clippy::match_same_arms)]

// Centralized keyboard mapping over `KeyboardEvent.key` values, including
// the legacy names older engines still report.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Tab,
    Escape,
    Enter,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Other,
}

impl Key {
    #[must_use]
    pub fn parse(key: &str) -> Self {
        match key {
            "Tab" => Self::Tab,
            "Escape" | "Esc" => Self::Escape,
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn is_arrow(self) -> bool {
        matches!(
            self,
            Self::ArrowUp | Self::ArrowDown | Self::ArrowLeft | Self::ArrowRight
        )
    }

    /// Enter and Space both activate a button-like control.
    #[must_use]
    pub const fn is_activation(self) -> bool {
        matches!(self, Self::Enter | Self::Space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_maps() {
        assert_eq!(Key::parse("Tab"), Key::Tab);
        assert_eq!(Key::parse("Esc"), Key::Escape);
        assert_eq!(Key::parse(" "), Key::Space);
        assert_eq!(Key::parse("Spacebar"), Key::Space);
        assert_eq!(Key::parse("Left"), Key::ArrowLeft);
        assert_eq!(Key::parse("ArrowDown"), Key::ArrowDown);
        assert_eq!(Key::parse("a"), Key::Other);
    }

    #[test]
    fn arrow_and_activation_groups() {
        assert!(Key::ArrowRight.is_arrow());
        assert!(!Key::Tab.is_arrow());
        assert!(Key::Enter.is_activation());
        assert!(Key::Space.is_activation());
        assert!(!Key::Escape.is_activation());
    }
}
