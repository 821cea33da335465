//! Design tokens and clamp ranges.
//!
//! Every style field resolves through the same fallback chain:
//! explicit value → block-kind default → the token defaults here.
//! Every user-tunable numeric is clamped to its documented range
//! before use, so out-of-range values from a corrupted save never
//! reach the visual output.

/// Inclusive `[min, max]` range for one tunable numeric.
pub type Range = (f64, f64);

pub const OPACITY_RANGE: Range = (0.0, 100.0);
pub const BLUR_RANGE: Range = (0.0, 20.0);
pub const PADDING_RANGE: Range = (0.0, 200.0);
pub const MARGIN_RANGE: Range = (0.0, 200.0);
pub const FONT_SIZE_RANGE: Range = (8.0, 200.0);
pub const LINE_HEIGHT_RANGE: Range = (0.8, 3.0);
pub const LETTER_SPACING_RANGE: Range = (-5.0, 20.0);
pub const HEADER_HEIGHT_VH_RANGE: Range = (20.0, 100.0);
pub const THICKNESS_RANGE: Range = (1.0, 40.0);
pub const SPACER_HEIGHT_RANGE: Range = (0.0, 600.0);
pub const RADIUS_RANGE: Range = (0.0, 100.0);
pub const RATIO_RANGE: Range = (10.0, 90.0);
pub const GAP_RANGE: Range = (0.0, 120.0);
pub const FILTER_RANGE: Range = (0.0, 200.0);
pub const WIDTH_PCT_RANGE: Range = (5.0, 100.0);
pub const FOCAL_RANGE: Range = (0.0, 100.0);
pub const ASPECT_RATIO_RANGE: Range = (0.1, 10.0);
pub const ANIMATION_MS_RANGE: Range = (0.0, 10_000.0);

pub const DEFAULT_TEXT_COLOR: &str = "#1f2937";
pub const DEFAULT_ACCENT_COLOR: &str = "#c2410c";
pub const DEFAULT_DIVIDER_COLOR: &str = "#e5e7eb";
pub const DEFAULT_OVERLAY_COLOR: &str = "#000000";
pub const DEFAULT_HEADER_TEXT_COLOR: &str = "#ffffff";
pub const DEFAULT_HEADER_BG_COLOR: &str = "#111827";
pub const DEFAULT_BUTTON_TEXT_COLOR: &str = "#ffffff";

pub const DEFAULT_HEADING_SIZE: f64 = 32.0;
pub const DEFAULT_TEXT_SIZE: f64 = 16.0;
pub const DEFAULT_BUTTON_SIZE: f64 = 16.0;
pub const DEFAULT_HEADER_TITLE_SIZE: f64 = 48.0;
pub const DEFAULT_HEADER_SUBTITLE_SIZE: f64 = 20.0;
pub const DEFAULT_LINE_HEIGHT: f64 = 1.5;

pub const DEFAULT_BUTTON_PADDING_Y: f64 = 12.0;
pub const DEFAULT_BUTTON_PADDING_X: f64 = 24.0;
pub const DEFAULT_TWO_COL_GAP: f64 = 24.0;
pub const DEFAULT_WRAP_GAP: f64 = 16.0;
pub const DEFAULT_OVERLAY_OPACITY: f64 = 40.0;

pub const DEFAULT_ANIMATION_DURATION_MS: f64 = 400.0;
pub const DEFAULT_ANIMATION_DELAY_MS: f64 = 0.0;

/// Clamp into a range; non-finite values collapse to the minimum.
pub fn clamp_to(value: f64, (min, max): Range) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        min
    }
}

/// Resolve an optional tunable: explicit (clamped) or fallback.
pub fn resolve(explicit: Option<f64>, range: Range, fallback: f64) -> f64 {
    match explicit {
        Some(value) => clamp_to(value, range),
        None => fallback,
    }
}
