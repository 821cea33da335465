//! Normalized freeform placement.
//!
//! Positions are stored as percentages of the device frame, never as
//! pixels, so a record stays valid when the frame resizes or the
//! breakpoint changes. The frame's pixel rectangle is an external,
//! time-varying input sampled by the transform engine at gesture start.

use serde::{Deserialize, Serialize};

/// Placement of one block on the freeform canvas.
///
/// `x_pct`/`y_pct` are always present and clamped to `[0, 100]`.
/// Width, height, z-order, and rotation are optional: a block without
/// an explicit size renders at its natural size, and array order
/// breaks z ties.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Position {
    pub x_pct: f64,
    pub y_pct: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h_pct: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotate_deg: Option<f64>,
}

impl Position {
    pub fn at(x_pct: f64, y_pct: f64) -> Self {
        Position {
            x_pct,
            y_pct,
            ..Default::default()
        }
    }

    /// Clamp x/y into `[0, 100]` and scrub non-finite values.
    ///
    /// Applied on every update so out-of-range or corrupt coordinates
    /// never reach storage.
    pub fn clamped(mut self) -> Self {
        self.x_pct = clamp_pct(self.x_pct);
        self.y_pct = clamp_pct(self.y_pct);
        self.w_pct = self.w_pct.filter(|v| v.is_finite());
        self.h_pct = self.h_pct.filter(|v| v.is_finite());
        self.rotate_deg = self.rotate_deg.filter(|v| v.is_finite());
        self
    }
}

fn clamp_pct(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(Position::at(-15.0, 130.0).clamped().x_pct, 0.0);
        assert_eq!(Position::at(-15.0, 130.0).clamped().y_pct, 100.0);
        assert_eq!(Position::at(42.5, 17.0).clamped(), Position::at(42.5, 17.0));
    }

    #[test]
    fn test_clamp_scrubs_non_finite() {
        let position = Position {
            x_pct: f64::NAN,
            y_pct: f64::INFINITY,
            rotate_deg: Some(f64::NAN),
            ..Default::default()
        }
        .clamped();
        assert_eq!(position.x_pct, 0.0);
        assert_eq!(position.y_pct, 0.0);
        assert_eq!(position.rotate_deg, None);
    }

    #[test]
    fn test_sparse_round_trip() {
        let position = Position {
            x_pct: 10.0,
            y_pct: 20.0,
            w_pct: Some(30.0),
            ..Default::default()
        };
        let json = serde_json::to_value(position).unwrap();
        assert_eq!(json, serde_json::json!({"xPct": 10.0, "yPct": 20.0, "wPct": 30.0}));
        let back: Position = serde_json::from_value(json).unwrap();
        assert_eq!(back, position);
    }
}
