#![forbid(unsafe_code)]

//! Edge-handle vocabulary shared by the machine and the host controller.
//!
//! Pointer coordinates throughout panelgrip are `f64` CSS pixels along the
//! horizontal axis. Only the X coordinate participates in resize math; hosts
//! with richer pointer events project down to it before dispatching.

use serde::{Deserialize, Serialize};

/// Which edge of the panel a drag handle sits on.
///
/// A handle may be absent on either side; absence is a host concern (no
/// listener is ever bound for it) and never an error in the model layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HandleSide {
    /// Handle on the left edge. Dragging toward negative X grows the panel.
    Left,
    /// Handle on the right edge. Dragging toward positive X grows the panel.
    Right,
}

impl HandleSide {
    /// Map a pointer delta to a width delta for this edge.
    ///
    /// The right handle grows the panel as the pointer moves right; the left
    /// handle grows it as the pointer moves left, so the sign flips.
    #[must_use]
    pub fn widen_delta(self, dx: f64) -> f64 {
        match self {
            Self::Left => -dx,
            Self::Right => dx,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_handle_widens_with_positive_delta() {
        assert_eq!(HandleSide::Right.widen_delta(100.0), 100.0);
        assert_eq!(HandleSide::Right.widen_delta(-40.0), -40.0);
    }

    #[test]
    fn left_handle_widens_with_negative_delta() {
        assert_eq!(HandleSide::Left.widen_delta(-100.0), 100.0);
        assert_eq!(HandleSide::Left.widen_delta(25.0), -25.0);
    }

    #[test]
    fn serde_snake_case_tags() {
        let json = serde_json::to_string(&HandleSide::Left).unwrap();
        assert_eq!(json, "\"left\"");
        let side: HandleSide = serde_json::from_str("\"right\"").unwrap();
        assert_eq!(side, HandleSide::Right);
    }
}
