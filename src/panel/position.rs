//! Screen position of the floating panel.

use serde::{Deserialize, Serialize};

/// CSS-style offsets, persisted as `{ "top": .., "left": .. }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelPosition {
    pub top: String,
    pub left: String,
}

impl Default for PanelPosition {
    fn default() -> Self {
        Self::new("90%", "50%")
    }
}

impl PanelPosition {
    pub fn new(top: impl Into<String>, left: impl Into<String>) -> Self {
        Self {
            top: top.into(),
            left: left.into(),
        }
    }

    /// Position from pixel offsets of the panel's top-left corner.
    #[must_use]
    pub fn from_pixels(left: i32, top: i32) -> Self {
        Self::new(format!("{top}px"), format!("{left}px"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_bottom_center() {
        let pos = PanelPosition::default();
        assert_eq!(pos.top, "90%");
        assert_eq!(pos.left, "50%");
    }

    #[test]
    fn test_from_pixels() {
        let pos = PanelPosition::from_pixels(340, -12);
        assert_eq!(pos.left, "340px");
        assert_eq!(pos.top, "-12px");
    }
}
