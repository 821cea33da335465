//! # Block Patches
//!
//! Partial updates issued by the inspector and the transform engine.
//! A patch targets one block kind; applying it to a block of another
//! kind is a programmer error surfaced as [`ModelError::KindMismatch`].
//!
//! Scalar cells follow the merge rule from [`crate::merge`]; style
//! sub-records nest their own record patches and merge through
//! [`merge_slot`], so sibling style fields are never dropped. Patching
//! is the only way to update styles — there is deliberately no API for
//! replacing a whole sub-record.

use crate::block::{Alignment, Block, BlockKind, ButtonVariant, Column, HeaderBackground, ImageFit, ImageSide};
use crate::error::ModelError;
use crate::merge::{merge_slot, Field};
use crate::style::{AnimationPatch, BackgroundPatch, OverlayPatch, SpacingPatch, TypographyPatch};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Partial update for one column of a `twoCol` block.
///
/// Column content cells operate on the nested blocks: setting text
/// creates the nested text block on demand, and an empty image URL
/// removes the nested image block rather than erroring.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnPatch {
    #[serde(skip_serializing_if = "Field::is_keep")]
    pub text: Field<String>,
    #[serde(skip_serializing_if = "Field::is_keep")]
    pub image_src: Field<String>,
    #[serde(skip_serializing_if = "Field::is_keep")]
    pub wrap: Field<bool>,
    #[serde(skip_serializing_if = "Field::is_keep")]
    pub image_side: Field<ImageSide>,
    #[serde(skip_serializing_if = "Field::is_keep")]
    pub wrap_gap: Field<f64>,
}

impl ColumnPatch {
    pub fn is_noop(&self) -> bool {
        self.text.is_keep()
            && self.image_src.is_keep()
            && self.wrap.is_keep()
            && self.image_side.is_keep()
            && self.wrap_gap.is_keep()
    }

    fn apply_to(self, column: &mut Column) {
        match self.text {
            Field::Keep => {}
            Field::Clear => column.text = None,
            Field::Set(content) => match column.text.as_deref_mut() {
                Some(Block::Text { text, .. }) => *text = content,
                _ => {
                    let mut block = Block::new(BlockKind::Text);
                    if let Block::Text { text, .. } = &mut block {
                        *text = content;
                    }
                    column.text = Some(Box::new(block));
                }
            },
        }

        match self.image_src {
            Field::Keep => {}
            Field::Clear => column.image = None,
            Field::Set(url) if url.trim().is_empty() => {
                // An empty URL means "remove image", not an error.
                debug!("column image cleared via empty url");
                column.image = None;
            }
            Field::Set(url) => match column.image.as_deref_mut() {
                Some(Block::Image { src, .. }) => *src = url,
                _ => {
                    let mut block = Block::new(BlockKind::Image);
                    if let Block::Image { src, .. } = &mut block {
                        *src = url;
                    }
                    column.image = Some(Box::new(block));
                }
            },
        }

        self.wrap.apply(&mut column.wrap);
        self.image_side.apply(&mut column.image_side);
        self.wrap_gap.apply(&mut column.wrap_gap);
    }
}

/// Partial update for one block, tagged by kind like the block itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum BlockPatch {
    Heading {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        align: Field<Alignment>,
        #[serde(default, skip_serializing_if = "TypographyPatch::is_noop")]
        typography: TypographyPatch,
        #[serde(default, skip_serializing_if = "BackgroundPatch::is_noop")]
        background: BackgroundPatch,
        #[serde(default, skip_serializing_if = "SpacingPatch::is_noop")]
        spacing: SpacingPatch,
        #[serde(default, skip_serializing_if = "OverlayPatch::is_noop")]
        overlay: OverlayPatch,
        #[serde(default, skip_serializing_if = "AnimationPatch::is_noop")]
        animation: AnimationPatch,
    },

    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        align: Field<Alignment>,
        #[serde(default, skip_serializing_if = "TypographyPatch::is_noop")]
        typography: TypographyPatch,
        #[serde(default, skip_serializing_if = "BackgroundPatch::is_noop")]
        background: BackgroundPatch,
        #[serde(default, skip_serializing_if = "SpacingPatch::is_noop")]
        spacing: SpacingPatch,
        #[serde(default, skip_serializing_if = "OverlayPatch::is_noop")]
        overlay: OverlayPatch,
        #[serde(default, skip_serializing_if = "AnimationPatch::is_noop")]
        animation: AnimationPatch,
    },

    Image {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        src: Option<String>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        alt: Field<String>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        width_pct: Field<f64>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        fit: Field<ImageFit>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        aspect_ratio: Field<f64>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        focal_x: Field<f64>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        focal_y: Field<f64>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        corner_radius: Field<f64>,
        #[serde(default, skip_serializing_if = "BackgroundPatch::is_noop")]
        background: BackgroundPatch,
        #[serde(default, skip_serializing_if = "OverlayPatch::is_noop")]
        overlay: OverlayPatch,
        #[serde(default, skip_serializing_if = "AnimationPatch::is_noop")]
        animation: AnimationPatch,
    },

    Button {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        label: Option<String>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        href: Field<String>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        new_tab: Field<bool>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        variant: Field<ButtonVariant>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        color: Field<String>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        text_color: Field<String>,
        #[serde(default, skip_serializing_if = "TypographyPatch::is_noop")]
        typography: TypographyPatch,
        #[serde(default, skip_serializing_if = "SpacingPatch::is_noop")]
        spacing: SpacingPatch,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        radius: Field<f64>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        shadow: Field<bool>,
        #[serde(default, skip_serializing_if = "AnimationPatch::is_noop")]
        animation: AnimationPatch,
    },

    Divider {
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        thickness: Field<f64>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        color: Field<String>,
        #[serde(default, skip_serializing_if = "SpacingPatch::is_noop")]
        spacing: SpacingPatch,
        #[serde(default, skip_serializing_if = "AnimationPatch::is_noop")]
        animation: AnimationPatch,
    },

    Spacer {
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        height: Field<f64>,
        #[serde(default, skip_serializing_if = "BackgroundPatch::is_noop")]
        background: BackgroundPatch,
    },

    TwoCol {
        #[serde(default, skip_serializing_if = "ColumnPatch::is_noop")]
        left: ColumnPatch,
        #[serde(default, skip_serializing_if = "ColumnPatch::is_noop")]
        right: ColumnPatch,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        ratio: Field<f64>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        gap: Field<f64>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        padding: Field<f64>,
        #[serde(default, skip_serializing_if = "AnimationPatch::is_noop")]
        animation: AnimationPatch,
    },

    Header {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        subtitle: Field<String>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        tagline: Field<String>,
        /// Switching background mode replaces the whole mode record;
        /// the mode discriminant has no meaningful field-wise merge.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        background: Option<HeaderBackground>,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        overlay_enabled: Field<bool>,
        #[serde(default, skip_serializing_if = "OverlayPatch::is_noop")]
        overlay: OverlayPatch,
        #[serde(default, skip_serializing_if = "TypographyPatch::is_noop")]
        typography: TypographyPatch,
        #[serde(default, skip_serializing_if = "Field::is_keep")]
        height_vh: Field<f64>,
        #[serde(default, skip_serializing_if = "AnimationPatch::is_noop")]
        animation: AnimationPatch,
    },
}

impl BlockPatch {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockPatch::Heading { .. } => BlockKind::Heading,
            BlockPatch::Text { .. } => BlockKind::Text,
            BlockPatch::Image { .. } => BlockKind::Image,
            BlockPatch::Button { .. } => BlockKind::Button,
            BlockPatch::Divider { .. } => BlockKind::Divider,
            BlockPatch::Spacer { .. } => BlockKind::Spacer,
            BlockPatch::TwoCol { .. } => BlockKind::TwoCol,
            BlockPatch::Header { .. } => BlockKind::Header,
        }
    }

    /// Merge this patch into `block`.
    pub fn apply_to(self, block: &mut Block) -> Result<(), ModelError> {
        if self.kind() != block.kind() {
            return Err(ModelError::KindMismatch {
                patch: self.kind(),
                block: block.kind(),
            });
        }

        match (self, block) {
            (
                BlockPatch::Heading {
                    text: patch_text,
                    align: patch_align,
                    typography: patch_typography,
                    background: patch_background,
                    spacing: patch_spacing,
                    overlay: patch_overlay,
                    animation: patch_animation,
                },
                Block::Heading {
                    text,
                    align,
                    typography,
                    background,
                    spacing,
                    overlay,
                    animation,
                    ..
                },
            )
            | (
                BlockPatch::Text {
                    text: patch_text,
                    align: patch_align,
                    typography: patch_typography,
                    background: patch_background,
                    spacing: patch_spacing,
                    overlay: patch_overlay,
                    animation: patch_animation,
                },
                Block::Text {
                    text,
                    align,
                    typography,
                    background,
                    spacing,
                    overlay,
                    animation,
                    ..
                },
            ) => {
                if let Some(content) = patch_text {
                    *text = content;
                }
                patch_align.apply(align);
                merge_slot(typography, patch_typography);
                merge_slot(background, patch_background);
                merge_slot(spacing, patch_spacing);
                merge_slot(overlay, patch_overlay);
                merge_slot(animation, patch_animation);
            }

            (
                BlockPatch::Image {
                    src: patch_src,
                    alt: patch_alt,
                    width_pct: patch_width,
                    fit: patch_fit,
                    aspect_ratio: patch_aspect,
                    focal_x: patch_focal_x,
                    focal_y: patch_focal_y,
                    corner_radius: patch_radius,
                    background: patch_background,
                    overlay: patch_overlay,
                    animation: patch_animation,
                },
                Block::Image {
                    src,
                    alt,
                    width_pct,
                    fit,
                    aspect_ratio,
                    focal_x,
                    focal_y,
                    corner_radius,
                    background,
                    overlay,
                    animation,
                    ..
                },
            ) => {
                if let Some(url) = patch_src {
                    *src = url;
                }
                patch_alt.apply(alt);
                patch_width.apply(width_pct);
                patch_fit.apply(fit);
                patch_aspect.apply(aspect_ratio);
                patch_focal_x.apply(focal_x);
                patch_focal_y.apply(focal_y);
                patch_radius.apply(corner_radius);
                merge_slot(background, patch_background);
                merge_slot(overlay, patch_overlay);
                merge_slot(animation, patch_animation);
            }

            (
                BlockPatch::Button {
                    label: patch_label,
                    href: patch_href,
                    new_tab: patch_new_tab,
                    variant: patch_variant,
                    color: patch_color,
                    text_color: patch_text_color,
                    typography: patch_typography,
                    spacing: patch_spacing,
                    radius: patch_radius,
                    shadow: patch_shadow,
                    animation: patch_animation,
                },
                Block::Button {
                    label,
                    href,
                    new_tab,
                    variant,
                    color,
                    text_color,
                    typography,
                    spacing,
                    radius,
                    shadow,
                    animation,
                    ..
                },
            ) => {
                if let Some(text) = patch_label {
                    *label = text;
                }
                patch_href.apply(href);
                patch_new_tab.apply(new_tab);
                patch_variant.apply(variant);
                patch_color.apply(color);
                patch_text_color.apply(text_color);
                merge_slot(typography, patch_typography);
                merge_slot(spacing, patch_spacing);
                patch_radius.apply(radius);
                patch_shadow.apply(shadow);
                merge_slot(animation, patch_animation);
            }

            (
                BlockPatch::Divider {
                    thickness: patch_thickness,
                    color: patch_color,
                    spacing: patch_spacing,
                    animation: patch_animation,
                },
                Block::Divider {
                    thickness,
                    color,
                    spacing,
                    animation,
                    ..
                },
            ) => {
                patch_thickness.apply(thickness);
                patch_color.apply(color);
                merge_slot(spacing, patch_spacing);
                merge_slot(animation, patch_animation);
            }

            (
                BlockPatch::Spacer {
                    height: patch_height,
                    background: patch_background,
                },
                Block::Spacer {
                    height, background, ..
                },
            ) => {
                patch_height.apply(height);
                merge_slot(background, patch_background);
            }

            (
                BlockPatch::TwoCol {
                    left: patch_left,
                    right: patch_right,
                    ratio: patch_ratio,
                    gap: patch_gap,
                    padding: patch_padding,
                    animation: patch_animation,
                },
                Block::TwoCol {
                    left,
                    right,
                    ratio,
                    gap,
                    padding,
                    animation,
                    ..
                },
            ) => {
                patch_left.apply_to(left);
                patch_right.apply_to(right);
                patch_ratio.apply(ratio);
                patch_gap.apply(gap);
                patch_padding.apply(padding);
                merge_slot(animation, patch_animation);
            }

            (
                BlockPatch::Header {
                    title: patch_title,
                    subtitle: patch_subtitle,
                    tagline: patch_tagline,
                    background: patch_background,
                    overlay_enabled: patch_overlay_enabled,
                    overlay: patch_overlay,
                    typography: patch_typography,
                    height_vh: patch_height,
                    animation: patch_animation,
                },
                Block::Header {
                    title,
                    subtitle,
                    tagline,
                    background,
                    overlay_enabled,
                    overlay,
                    typography,
                    height_vh,
                    animation,
                    ..
                },
            ) => {
                if let Some(text) = patch_title {
                    *title = text;
                }
                patch_subtitle.apply(subtitle);
                patch_tagline.apply(tagline);
                if let Some(mode) = patch_background {
                    *background = mode;
                }
                patch_overlay_enabled.apply(overlay_enabled);
                merge_slot(overlay, patch_overlay);
                merge_slot(typography, patch_typography);
                patch_height.apply(height_vh);
                merge_slot(animation, patch_animation);
            }

            // Kind equality was checked above.
            _ => unreachable!("patch kind checked before dispatch"),
        }

        Ok(())
    }
}
