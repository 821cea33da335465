//! # Content Blocks
//!
//! The tagged union of composable content blocks. Every variant carries
//! a stable [`BlockId`] and kind-specific fields; style sub-records are
//! optional and sparse.
//!
//! The `twoCol` variant nests two full block trees (one optional text
//! block and one optional image block per column), so id regeneration
//! and traversal recurse explicitly instead of assuming a flat list.

use crate::error::ModelError;
use crate::id::BlockId;
use crate::style::{Animation, Background, Overlay, Spacing, Typography};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Horizontal alignment of text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// How an image fills its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFit {
    Cover,
    Contain,
    Fill,
}

impl ImageFit {
    pub fn as_css(self) -> &'static str {
        match self {
            ImageFit::Cover => "cover",
            ImageFit::Contain => "contain",
            ImageFit::Fill => "fill",
        }
    }
}

/// Which side of a column the image sits on.
///
/// Left/right participate in wrap-around text flow; top/bottom always
/// stack image and text vertically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSide {
    Left,
    Right,
    Top,
    Bottom,
}

impl ImageSide {
    /// Wrap-around flow is only defined for horizontal placement.
    pub fn supports_wrap(self) -> bool {
        matches!(self, ImageSide::Left | ImageSide::Right)
    }
}

/// Visual treatment of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Solid,
    Outline,
    Ghost,
}

/// Header background mode with mode-specific parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum HeaderBackground {
    Color {
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    Gradient {
        from: String,
        to: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        angle: Option<f64>,
    },
    Image {
        src: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        focal_x: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        focal_y: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        blur: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        opacity: Option<f64>,
    },
}

impl HeaderBackground {
    /// Overlay tint only composes above gradient and image fills.
    pub fn supports_overlay(&self) -> bool {
        !matches!(self, HeaderBackground::Color { .. })
    }
}

impl Default for HeaderBackground {
    fn default() -> Self {
        HeaderBackground::Color { color: None }
    }
}

/// One side of a two-column block.
///
/// Columns hold full nested blocks rather than bare strings so column
/// content styles the same way standalone content does.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Column {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Box<Block>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Box<Block>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_side: Option<ImageSide>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrap_gap: Option<f64>,
}

/// Discriminant of the block union. Parsing an unknown kind fails fast:
/// kinds only come from code, never from users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockKind {
    Heading,
    Text,
    Image,
    Button,
    Divider,
    Spacer,
    TwoCol,
    Header,
}

impl BlockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Heading => "heading",
            BlockKind::Text => "text",
            BlockKind::Image => "image",
            BlockKind::Button => "button",
            BlockKind::Divider => "divider",
            BlockKind::Spacer => "spacer",
            BlockKind::TwoCol => "twoCol",
            BlockKind::Header => "header",
        }
    }

    pub const ALL: [BlockKind; 8] = [
        BlockKind::Heading,
        BlockKind::Text,
        BlockKind::Image,
        BlockKind::Button,
        BlockKind::Divider,
        BlockKind::Spacer,
        BlockKind::TwoCol,
        BlockKind::Header,
    ];
}

impl FromStr for BlockKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| ModelError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One content unit in a composed page or slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Block {
    Heading {
        id: BlockId,
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        align: Option<Alignment>,
        #[serde(skip_serializing_if = "Option::is_none")]
        typography: Option<Typography>,
        #[serde(skip_serializing_if = "Option::is_none")]
        background: Option<Background>,
        #[serde(skip_serializing_if = "Option::is_none")]
        spacing: Option<Spacing>,
        #[serde(skip_serializing_if = "Option::is_none")]
        overlay: Option<Overlay>,
        #[serde(skip_serializing_if = "Option::is_none")]
        animation: Option<Animation>,
    },

    Text {
        id: BlockId,
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        align: Option<Alignment>,
        #[serde(skip_serializing_if = "Option::is_none")]
        typography: Option<Typography>,
        #[serde(skip_serializing_if = "Option::is_none")]
        background: Option<Background>,
        #[serde(skip_serializing_if = "Option::is_none")]
        spacing: Option<Spacing>,
        #[serde(skip_serializing_if = "Option::is_none")]
        overlay: Option<Overlay>,
        #[serde(skip_serializing_if = "Option::is_none")]
        animation: Option<Animation>,
    },

    Image {
        id: BlockId,
        src: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        alt: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        width_pct: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fit: Option<ImageFit>,
        #[serde(skip_serializing_if = "Option::is_none")]
        aspect_ratio: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        focal_x: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        focal_y: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        corner_radius: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        background: Option<Background>,
        #[serde(skip_serializing_if = "Option::is_none")]
        overlay: Option<Overlay>,
        #[serde(skip_serializing_if = "Option::is_none")]
        animation: Option<Animation>,
    },

    Button {
        id: BlockId,
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        href: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        new_tab: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        variant: Option<ButtonVariant>,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        text_color: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        typography: Option<Typography>,
        #[serde(skip_serializing_if = "Option::is_none")]
        spacing: Option<Spacing>,
        #[serde(skip_serializing_if = "Option::is_none")]
        radius: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        shadow: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        animation: Option<Animation>,
    },

    Divider {
        id: BlockId,
        #[serde(skip_serializing_if = "Option::is_none")]
        thickness: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        spacing: Option<Spacing>,
        #[serde(skip_serializing_if = "Option::is_none")]
        animation: Option<Animation>,
    },

    Spacer {
        id: BlockId,
        #[serde(skip_serializing_if = "Option::is_none")]
        height: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        background: Option<Background>,
    },

    TwoCol {
        id: BlockId,
        #[serde(default)]
        left: Column,
        #[serde(default)]
        right: Column,
        #[serde(skip_serializing_if = "Option::is_none")]
        ratio: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        gap: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        padding: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        animation: Option<Animation>,
    },

    Header {
        id: BlockId,
        title: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        subtitle: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        tagline: Option<String>,
        #[serde(default)]
        background: HeaderBackground,
        #[serde(skip_serializing_if = "Option::is_none")]
        overlay_enabled: Option<bool>,
        #[serde(skip_serializing_if = "Option::is_none")]
        overlay: Option<Overlay>,
        #[serde(skip_serializing_if = "Option::is_none")]
        typography: Option<Typography>,
        #[serde(skip_serializing_if = "Option::is_none")]
        height_vh: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        animation: Option<Animation>,
    },
}

impl Block {
    /// Construct a new block of the given kind with a fresh id and
    /// kind-appropriate defaults.
    pub fn new(kind: BlockKind) -> Block {
        let id = BlockId::new();
        match kind {
            BlockKind::Heading => Block::Heading {
                id,
                text: "New heading".to_string(),
                align: Some(Alignment::Left),
                typography: None,
                background: None,
                spacing: None,
                overlay: None,
                animation: None,
            },
            BlockKind::Text => Block::Text {
                id,
                text: "Write something…".to_string(),
                align: Some(Alignment::Left),
                typography: None,
                background: None,
                spacing: None,
                overlay: None,
                animation: None,
            },
            BlockKind::Image => Block::Image {
                id,
                src: String::new(),
                alt: None,
                width_pct: Some(100.0),
                fit: Some(ImageFit::Cover),
                aspect_ratio: None,
                focal_x: None,
                focal_y: None,
                corner_radius: None,
                background: None,
                overlay: None,
                animation: None,
            },
            BlockKind::Button => Block::Button {
                id,
                label: "Order now".to_string(),
                href: None,
                new_tab: None,
                variant: Some(ButtonVariant::Solid),
                color: None,
                text_color: None,
                typography: None,
                spacing: None,
                radius: None,
                shadow: None,
                animation: None,
            },
            BlockKind::Divider => Block::Divider {
                id,
                thickness: Some(1.0),
                color: None,
                spacing: None,
                animation: None,
            },
            BlockKind::Spacer => Block::Spacer {
                id,
                height: Some(32.0),
                background: None,
            },
            BlockKind::TwoCol => Block::TwoCol {
                id,
                left: Column::default(),
                right: Column::default(),
                ratio: Some(50.0),
                gap: Some(24.0),
                padding: None,
                animation: None,
            },
            BlockKind::Header => Block::Header {
                id,
                title: "Welcome".to_string(),
                subtitle: None,
                tagline: None,
                background: HeaderBackground::default(),
                overlay_enabled: None,
                overlay: None,
                typography: None,
                height_vh: Some(60.0),
                animation: None,
            },
        }
    }

    pub fn id(&self) -> BlockId {
        match self {
            Block::Heading { id, .. }
            | Block::Text { id, .. }
            | Block::Image { id, .. }
            | Block::Button { id, .. }
            | Block::Divider { id, .. }
            | Block::Spacer { id, .. }
            | Block::TwoCol { id, .. }
            | Block::Header { id, .. } => *id,
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Heading { .. } => BlockKind::Heading,
            Block::Text { .. } => BlockKind::Text,
            Block::Image { .. } => BlockKind::Image,
            Block::Button { .. } => BlockKind::Button,
            Block::Divider { .. } => BlockKind::Divider,
            Block::Spacer { .. } => BlockKind::Spacer,
            Block::TwoCol { .. } => BlockKind::TwoCol,
            Block::Header { .. } => BlockKind::Header,
        }
    }

    /// Deep-clone with fresh ids on every node of the tree.
    ///
    /// Duplication must never produce id collisions, including for the
    /// nested blocks inside `twoCol` columns.
    pub fn clone_with_new_ids(&self) -> Block {
        let mut clone = self.clone();
        clone.regenerate_ids();
        clone
    }

    fn regenerate_ids(&mut self) {
        match self {
            Block::Heading { id, .. }
            | Block::Text { id, .. }
            | Block::Image { id, .. }
            | Block::Button { id, .. }
            | Block::Divider { id, .. }
            | Block::Spacer { id, .. }
            | Block::Header { id, .. } => *id = BlockId::new(),
            Block::TwoCol {
                id, left, right, ..
            } => {
                *id = BlockId::new();
                for column in [left, right] {
                    if let Some(text) = &mut column.text {
                        text.regenerate_ids();
                    }
                    if let Some(image) = &mut column.image {
                        image.regenerate_ids();
                    }
                }
            }
        }
    }
}
