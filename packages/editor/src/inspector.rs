//! # Inspector Adapter Contract
//!
//! The property panel renders type-specific controls for the selected
//! block and issues patch/remove/duplicate operations against the
//! builder. It never reads or writes history directly — history is the
//! builder's business.
//!
//! The controls here are descriptors, not widgets: the host maps them
//! onto its own form fields and sends back [`InspectorEvent`]s.

use crate::builder::Builder;
use crate::EditorError;
use bloq_model::{Block, BlockId, BlockKind, BlockPatch};
use serde::Serialize;

/// Emitted by [`Builder::select`] so the host can auto-open the panel
/// for the selected block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelRequest {
    pub block: BlockId,
    pub kind: BlockKind,
}

/// One property control in the panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "control", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Control {
    TextInput { field: &'static str, label: &'static str },
    TextArea { field: &'static str, label: &'static str },
    NumberField {
        field: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
    },
    Toggle { field: &'static str, label: &'static str },
    ColorField { field: &'static str, label: &'static str },
    Select {
        field: &'static str,
        label: &'static str,
        options: &'static [&'static str],
    },
    ImagePicker { field: &'static str, label: &'static str },
}

/// An action the panel issues for the selected block.
#[derive(Debug, Clone, PartialEq)]
pub enum InspectorEvent {
    Patch(BlockPatch),
    Remove,
    Duplicate,
}

/// Apply a panel action to the builder. Duplicate returns the clone's
/// id so the host can scroll to it.
pub fn apply_event(
    builder: &mut Builder,
    id: BlockId,
    event: InspectorEvent,
) -> Result<Option<BlockId>, EditorError> {
    match event {
        InspectorEvent::Patch(patch) => {
            builder.patch_block(id, patch)?;
            Ok(None)
        }
        InspectorEvent::Remove => {
            builder.remove_block(id)?;
            Ok(None)
        }
        InspectorEvent::Duplicate => Ok(Some(builder.duplicate_block(id)?)),
    }
}

const ALIGN_OPTIONS: &[&str] = &["left", "center", "right"];
const FIT_OPTIONS: &[&str] = &["cover", "contain", "fill"];
const SIDE_OPTIONS: &[&str] = &["left", "right", "top", "bottom"];
const VARIANT_OPTIONS: &[&str] = &["solid", "outline", "ghost"];
const ANIMATION_OPTIONS: &[&str] =
    &["fade", "slide-up", "slide-down", "slide-left", "slide-right", "zoom"];
const BACKGROUND_MODE_OPTIONS: &[&str] = &["color", "gradient", "image"];

fn typography_controls() -> Vec<Control> {
    vec![
        Control::NumberField {
            field: "typography.fontSize",
            label: "Font size",
            min: 8.0,
            max: 200.0,
        },
        Control::ColorField {
            field: "typography.color",
            label: "Text color",
        },
        Control::Toggle {
            field: "typography.bold",
            label: "Bold",
        },
        Control::Toggle {
            field: "typography.italic",
            label: "Italic",
        },
    ]
}

fn animation_controls() -> Vec<Control> {
    vec![
        Control::Select {
            field: "animation.kind",
            label: "Entrance",
            options: ANIMATION_OPTIONS,
        },
        Control::NumberField {
            field: "animation.durationMs",
            label: "Duration (ms)",
            min: 0.0,
            max: 10_000.0,
        },
        Control::NumberField {
            field: "animation.delayMs",
            label: "Delay (ms)",
            min: 0.0,
            max: 10_000.0,
        },
    ]
}

/// The controls the panel shows for one block.
pub fn controls_for(block: &Block) -> Vec<Control> {
    let mut controls = match block.kind() {
        BlockKind::Heading | BlockKind::Text => {
            let mut controls = vec![
                Control::TextArea {
                    field: "text",
                    label: "Text",
                },
                Control::Select {
                    field: "align",
                    label: "Alignment",
                    options: ALIGN_OPTIONS,
                },
            ];
            controls.extend(typography_controls());
            controls.push(Control::ColorField {
                field: "background.color",
                label: "Background",
            });
            controls
        }

        BlockKind::Image => vec![
            Control::ImagePicker {
                field: "src",
                label: "Image",
            },
            Control::TextInput {
                field: "alt",
                label: "Alt text",
            },
            Control::NumberField {
                field: "widthPct",
                label: "Width (%)",
                min: 5.0,
                max: 100.0,
            },
            Control::Select {
                field: "fit",
                label: "Fit",
                options: FIT_OPTIONS,
            },
            Control::NumberField {
                field: "cornerRadius",
                label: "Corner radius",
                min: 0.0,
                max: 100.0,
            },
        ],

        BlockKind::Button => vec![
            Control::TextInput {
                field: "label",
                label: "Label",
            },
            Control::TextInput {
                field: "href",
                label: "Link",
            },
            Control::Toggle {
                field: "newTab",
                label: "Open in new tab",
            },
            Control::Select {
                field: "variant",
                label: "Style",
                options: VARIANT_OPTIONS,
            },
            Control::ColorField {
                field: "color",
                label: "Color",
            },
            Control::NumberField {
                field: "radius",
                label: "Radius",
                min: 0.0,
                max: 100.0,
            },
            Control::Toggle {
                field: "shadow",
                label: "Shadow",
            },
        ],

        BlockKind::Divider => vec![
            Control::NumberField {
                field: "thickness",
                label: "Thickness",
                min: 1.0,
                max: 40.0,
            },
            Control::ColorField {
                field: "color",
                label: "Color",
            },
        ],

        BlockKind::Spacer => vec![
            Control::NumberField {
                field: "height",
                label: "Height",
                min: 0.0,
                max: 600.0,
            },
            Control::ColorField {
                field: "background.color",
                label: "Background",
            },
        ],

        BlockKind::TwoCol => vec![
            Control::TextArea {
                field: "left.text",
                label: "Left text",
            },
            Control::ImagePicker {
                field: "left.imageSrc",
                label: "Left image",
            },
            Control::Toggle {
                field: "left.wrap",
                label: "Wrap text around image",
            },
            Control::Select {
                field: "left.imageSide",
                label: "Image side",
                options: SIDE_OPTIONS,
            },
            Control::TextArea {
                field: "right.text",
                label: "Right text",
            },
            Control::ImagePicker {
                field: "right.imageSrc",
                label: "Right image",
            },
            Control::NumberField {
                field: "ratio",
                label: "Split (%)",
                min: 10.0,
                max: 90.0,
            },
            Control::NumberField {
                field: "gap",
                label: "Gap",
                min: 0.0,
                max: 120.0,
            },
        ],

        BlockKind::Header => {
            let mut controls = vec![
                Control::TextInput {
                    field: "title",
                    label: "Title",
                },
                Control::TextInput {
                    field: "subtitle",
                    label: "Subtitle",
                },
                Control::TextInput {
                    field: "tagline",
                    label: "Tagline",
                },
                Control::Select {
                    field: "background.mode",
                    label: "Background",
                    options: BACKGROUND_MODE_OPTIONS,
                },
                Control::Toggle {
                    field: "overlayEnabled",
                    label: "Overlay",
                },
                Control::NumberField {
                    field: "overlay.opacity",
                    label: "Overlay opacity",
                    min: 0.0,
                    max: 100.0,
                },
                Control::NumberField {
                    field: "heightVh",
                    label: "Height (vh)",
                    min: 20.0,
                    max: 100.0,
                },
            ];
            controls.extend(typography_controls());
            controls
        }
    };

    controls.extend(animation_controls());
    controls
}
