//! Device kinds and scaling.
//!
//! Device kind is a rendering input, not block state: the host viewport
//! resolves its current width to a kind and re-renders whenever a
//! breakpoint boundary is crossed, even if the blocks are unchanged.

use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of the mobile breakpoint, in pixels.
pub const MOBILE_BREAKPOINT: f64 = 640.0;
/// Upper bound (exclusive) of the tablet breakpoint, in pixels.
pub const TABLET_BREAKPOINT: f64 = 1024.0;

/// The breakpoint a composition is being rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceKind {
    Mobile,
    Tablet,
    Desktop,
}

impl DeviceKind {
    /// Resolve a viewport width to a device kind.
    pub fn for_width(width: f64) -> DeviceKind {
        if width < MOBILE_BREAKPOINT {
            DeviceKind::Mobile
        } else if width < TABLET_BREAKPOINT {
            DeviceKind::Tablet
        } else {
            DeviceKind::Desktop
        }
    }

    /// Scale factor for font-size-like dimensions.
    ///
    /// Distinct from [`DeviceKind::spacing_scale`]; the two must not be
    /// conflated.
    pub fn font_scale(self) -> f64 {
        match self {
            DeviceKind::Mobile => 0.65,
            DeviceKind::Tablet => 0.85,
            DeviceKind::Desktop => 1.0,
        }
    }

    /// Scale factor for padding-like dimensions.
    pub fn spacing_scale(self) -> f64 {
        match self {
            DeviceKind::Mobile => 0.6,
            DeviceKind::Tablet => 0.85,
            DeviceKind::Desktop => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_boundaries() {
        assert_eq!(DeviceKind::for_width(0.0), DeviceKind::Mobile);
        assert_eq!(DeviceKind::for_width(639.9), DeviceKind::Mobile);
        assert_eq!(DeviceKind::for_width(640.0), DeviceKind::Tablet);
        assert_eq!(DeviceKind::for_width(1023.9), DeviceKind::Tablet);
        assert_eq!(DeviceKind::for_width(1024.0), DeviceKind::Desktop);
    }

    #[test]
    fn test_font_and_spacing_scales_differ() {
        assert_eq!(DeviceKind::Mobile.font_scale(), 0.65);
        assert_eq!(DeviceKind::Mobile.spacing_scale(), 0.6);
        assert_eq!(DeviceKind::Tablet.font_scale(), 0.85);
        assert_eq!(DeviceKind::Desktop.font_scale(), 1.0);
    }
}
