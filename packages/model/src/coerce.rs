//! # Lenient Config Loading
//!
//! Persisted configs are the one source of untrusted input this crate
//! tolerates. A corrupted save must never crash the editor: wrong
//! shapes are repaired to safe defaults, unknown block types are
//! skipped, and every repair is logged for diagnostics.
//!
//! Everything else in the crate is strict; this module is the boundary.

use crate::block::{Block, BlockKind};
use crate::config::{CompositionConfig, LayoutMode, PageLayout};
use crate::id::BlockId;
use crate::position::Position;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::str::FromStr;
use tracing::warn;

/// Style fields that must hold numbers; anything else is dropped.
const NUMERIC_KEYS: &[&str] = &[
    "fontSize",
    "letterSpacing",
    "lineHeight",
    "paddingTop",
    "paddingRight",
    "paddingBottom",
    "paddingLeft",
    "marginTop",
    "marginBottom",
    "opacity",
    "blur",
    "brightness",
    "contrast",
    "saturation",
    "thickness",
    "height",
    "widthPct",
    "aspectRatio",
    "focalX",
    "focalY",
    "cornerRadius",
    "radius",
    "ratio",
    "gap",
    "padding",
    "wrapGap",
    "heightVh",
    "durationMs",
    "delayMs",
    "angle",
];

const STRING_KEYS: &[&str] = &[
    "text", "src", "alt", "color", "textColor", "label", "href", "title", "subtitle", "tagline",
    "fontFamily", "image", "from", "to",
];

const BOOL_KEYS: &[&str] = &["bold", "italic", "underline", "newTab", "shadow", "wrap", "overlayEnabled"];

const ENUM_KEYS: &[(&str, &[&str])] = &[
    ("align", &["left", "center", "right"]),
    ("fit", &["cover", "contain", "fill"]),
    ("imageSide", &["left", "right", "top", "bottom"]),
    ("variant", &["solid", "outline", "ghost"]),
    (
        "kind",
        &["fade", "slide-up", "slide-down", "slide-left", "slide-right", "zoom"],
    ),
    ("mode", &["color", "gradient", "image"]),
];

/// Build a config from untrusted JSON, repairing what can be repaired.
pub fn config_from_json(value: Value) -> CompositionConfig {
    let Value::Object(mut root) = value else {
        warn!("config is not an object, starting empty");
        return CompositionConfig::default();
    };

    let mode = match root.get("mode").and_then(Value::as_str) {
        Some("freeform") => LayoutMode::Freeform,
        Some("structured") | None => LayoutMode::Structured,
        Some(other) => {
            warn!(mode = other, "unknown layout mode, using structured");
            LayoutMode::Structured
        }
    };

    let layout = match root.get("layout").and_then(Value::as_str) {
        Some("default") => Some(PageLayout::Default),
        Some("split") => Some(PageLayout::Split),
        None => None,
        Some(other) => {
            warn!(layout = other, "unknown page layout, dropping");
            None
        }
    };

    let structured_group_align = root
        .remove("structuredGroupAlign")
        .and_then(|value| serde_json::from_value(value).ok());

    let background = root.remove("background").and_then(|mut value| {
        if let Value::Object(map) = &mut value {
            sanitize_fields(map);
        }
        match serde_json::from_value(value) {
            Ok(background) => Some(background),
            Err(error) => {
                warn!(%error, "dropping malformed page background");
                None
            }
        }
    });

    let blocks = match root.remove("blocks") {
        Some(Value::Array(items)) => items.into_iter().filter_map(coerce_block).collect(),
        Some(_) => {
            warn!("blocks is not an array, starting empty");
            Vec::new()
        }
        None => Vec::new(),
    };

    let positions = match root.remove("positions") {
        Some(Value::Object(entries)) => coerce_positions(entries),
        Some(_) => {
            warn!("positions is not an object, dropping");
            BTreeMap::new()
        }
        None => BTreeMap::new(),
    };

    CompositionConfig {
        mode,
        background,
        blocks,
        positions,
        layout,
        structured_group_align,
    }
}

/// Coerce one block value; `None` means the block is unsalvageable and
/// gets skipped.
fn coerce_block(value: Value) -> Option<Block> {
    let Value::Object(mut map) = value else {
        warn!("block is not an object, skipping");
        return None;
    };

    let kind = match map.get("type").and_then(Value::as_str) {
        Some(name) => match BlockKind::from_str(name) {
            Ok(kind) => kind,
            Err(_) => {
                warn!(block_type = name, "unknown block type, skipping");
                return None;
            }
        },
        None => {
            warn!("block has no type, skipping");
            return None;
        }
    };

    let id = match map.get("id").and_then(Value::as_str).and_then(BlockId::parse) {
        Some(id) => id,
        None => {
            warn!(block_type = %kind, "block has no usable id, generating one");
            BlockId::new()
        }
    };
    map.insert("id".to_string(), Value::String(id.to_string()));

    if kind == BlockKind::TwoCol {
        for side in ["left", "right"] {
            let column = map.remove(side);
            map.insert(side.to_string(), coerce_column(side, column));
        }
    }

    sanitize_fields(&mut map);

    match serde_json::from_value(Value::Object(map)) {
        Ok(block) => Some(block),
        Err(error) => {
            warn!(block_type = %kind, %error, "block failed to parse after repair, using defaults");
            let mut block = Block::new(kind);
            set_block_id(&mut block, id);
            Some(block)
        }
    }
}

/// Columns must be objects; anything else becomes an empty column.
/// Nested text/image blocks are coerced recursively and dropped when
/// unsalvageable.
fn coerce_column(side: &str, value: Option<Value>) -> Value {
    let mut map = match value {
        Some(Value::Object(map)) => map,
        Some(_) => {
            warn!(side, "column is not an object, using empty column");
            Map::new()
        }
        None => Map::new(),
    };

    let nested: Vec<(&str, Option<Value>)> = ["text", "image"]
        .into_iter()
        .map(|slot| (slot, map.remove(slot)))
        .collect();

    // Sanitize scalar column fields first: the string rule for `text`
    // applies to text *content* elsewhere, not to these nested blocks.
    sanitize_fields(&mut map);

    for (slot, value) in nested {
        if let Some(value) = value {
            match coerce_block(value) {
                Some(block) => {
                    map.insert(
                        slot.to_string(),
                        serde_json::to_value(block).expect("block serializes infallibly"),
                    );
                }
                None => {
                    warn!(side, slot, "dropping malformed nested column block");
                }
            }
        }
    }

    Value::Object(map)
}

/// Drop fields whose value has the wrong primitive type, recursing
/// into style sub-records. Column subtrees are handled before this
/// runs, so the string rule for `image` (a background URL) cannot eat
/// a column's nested image block.
fn sanitize_fields(map: &mut Map<String, Value>) {
    let keys: Vec<String> = map.keys().cloned().collect();
    for key in keys {
        // Column subtrees were already coerced.
        if key == "left" || key == "right" {
            continue;
        }

        let drop = {
            let value = &map[&key];
            if NUMERIC_KEYS.contains(&key.as_str()) {
                !value.is_number()
            } else if STRING_KEYS.contains(&key.as_str()) {
                !value.is_string()
            } else if BOOL_KEYS.contains(&key.as_str()) {
                !value.is_boolean()
            } else if let Some((_, allowed)) = ENUM_KEYS.iter().find(|(name, _)| *name == key) {
                !value.as_str().is_some_and(|s| allowed.contains(&s))
            } else {
                false
            }
        };

        if drop {
            warn!(field = %key, "dropping style field with wrong type");
            map.remove(&key);
        } else if let Some(Value::Object(nested)) = map.get_mut(&key) {
            sanitize_fields(nested);
        }
    }
}

fn coerce_positions(entries: Map<String, Value>) -> BTreeMap<BlockId, Position> {
    let mut positions = BTreeMap::new();
    for (key, value) in entries {
        let Some(id) = BlockId::parse(&key) else {
            warn!(key = %key, "position key is not a block id, skipping");
            continue;
        };
        let Value::Object(map) = value else {
            warn!(key = %key, "position is not an object, skipping");
            continue;
        };

        let number = |name: &str| map.get(name).and_then(Value::as_f64).filter(|v| v.is_finite());
        let position = Position {
            x_pct: number("xPct").unwrap_or(0.0),
            y_pct: number("yPct").unwrap_or(0.0),
            w_pct: number("wPct"),
            h_pct: number("hPct"),
            z: map.get("z").and_then(Value::as_i64).map(|z| z as i32),
            rotate_deg: number("rotateDeg"),
        }
        .clamped();

        positions.insert(id, position);
    }
    positions
}

fn set_block_id(block: &mut Block, id: BlockId) {
    match block {
        Block::Heading { id: slot, .. }
        | Block::Text { id: slot, .. }
        | Block::Image { id: slot, .. }
        | Block::Button { id: slot, .. }
        | Block::Divider { id: slot, .. }
        | Block::Spacer { id: slot, .. }
        | Block::TwoCol { id: slot, .. }
        | Block::Header { id: slot, .. } => *slot = id,
    }
}
