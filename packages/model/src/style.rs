//! # Style Sub-Records
//!
//! The five sparse style categories shared by content blocks. Every
//! field is optional; blocks hold `Option<Record>` and an all-unset
//! record is stored as `None`, never as an empty record.
//!
//! All categories merge through the shared machinery in [`crate::merge`]:
//! patching one field never clears its siblings.

use crate::merge::{sparse_record, Field};
use serde::{Deserialize, Serialize};

/// Named entrance transition attached by the renderer when animation
/// is enabled on a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    Fade,
    SlideUp,
    SlideDown,
    SlideLeft,
    SlideRight,
    Zoom,
}

impl AnimationKind {
    /// Class-name suffix emitted by the renderer.
    pub fn as_str(self) -> &'static str {
        match self {
            AnimationKind::Fade => "fade",
            AnimationKind::SlideUp => "slide-up",
            AnimationKind::SlideDown => "slide-down",
            AnimationKind::SlideLeft => "slide-left",
            AnimationKind::SlideRight => "slide-right",
            AnimationKind::Zoom => "zoom",
        }
    }
}

sparse_record! {
    /// Text styling.
    Typography / TypographyPatch {
        font_size: f64,
        font_family: String,
        bold: bool,
        italic: bool,
        underline: bool,
        color: String,
        letter_spacing: f64,
        line_height: f64,
    }
}

sparse_record! {
    /// Box spacing, in logical pixels before device scaling.
    Spacing / SpacingPatch {
        padding_top: f64,
        padding_right: f64,
        padding_bottom: f64,
        padding_left: f64,
        margin_top: f64,
        margin_bottom: f64,
    }
}

sparse_record! {
    /// Block background fill.
    Background / BackgroundPatch {
        color: String,
        image: String,
        opacity: f64,
        blur: f64,
    }
}

sparse_record! {
    /// Tint layer composed above a background image or gradient.
    Overlay / OverlayPatch {
        color: String,
        opacity: f64,
        brightness: f64,
        contrast: f64,
        saturation: f64,
    }
}

sparse_record! {
    /// Entrance animation settings. A record without a `kind` leaves
    /// the block un-animated.
    Animation / AnimationPatch {
        kind: AnimationKind,
        duration_ms: f64,
        delay_ms: f64,
    }
}

impl Overlay {
    /// True when the operator explicitly set a tint. The renderer only
    /// composes an overlay layer for explicit settings.
    pub fn is_tinted(&self) -> bool {
        self.color.is_some() || self.opacity.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::{merge_slot, MergePatch};

    #[test]
    fn test_patch_preserves_sibling_fields() {
        let mut typography = Typography {
            bold: Some(true),
            color: Some("#111".to_string()),
            ..Default::default()
        };

        typography.merge(TypographyPatch {
            italic: Field::Set(true),
            ..Default::default()
        });

        assert_eq!(typography.bold, Some(true));
        assert_eq!(typography.color, Some("#111".to_string()));
        assert_eq!(typography.italic, Some(true));
    }

    #[test]
    fn test_all_categories_share_one_merge_path() {
        // Same three-state behavior for a second category; divergence
        // here would mean the shared macro broke.
        let mut spacing = Spacing {
            padding_top: Some(12.0),
            padding_left: Some(8.0),
            ..Default::default()
        };
        let patch: SpacingPatch =
            serde_json::from_str(r#"{"paddingTop":null,"marginTop":24}"#).unwrap();
        spacing.merge(patch);

        assert_eq!(spacing.padding_top, None);
        assert_eq!(spacing.padding_left, Some(8.0));
        assert_eq!(spacing.margin_top, Some(24.0));
    }

    #[test]
    fn test_sparse_serialization_stays_sparse() {
        let animation = Animation {
            kind: Some(AnimationKind::SlideUp),
            duration_ms: Some(300.0),
            delay_ms: None,
        };
        let json = serde_json::to_value(&animation).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"kind": "slide-up", "durationMs": 300.0})
        );
    }

    #[test]
    fn test_clearing_last_field_collapses_record() {
        let mut slot = Some(Overlay {
            opacity: Some(60.0),
            ..Default::default()
        });
        merge_slot(
            &mut slot,
            OverlayPatch {
                opacity: Field::Clear,
                ..Default::default()
            },
        );
        assert!(slot.is_none());
    }
}
