//! # Bloq Model
//!
//! Content schema for the page composition engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: blocks + styles + positions          │
//! │  - Tagged-union Block with nested trees     │
//! │  - Sparse style records, one merge rule     │
//! │  - Normalized freeform Position             │
//! │  - CompositionConfig wire shape             │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: (blocks, device) → visual tree    │
//! │ editor: mutations + history over the config │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **Ids are identity**: generated once, never reused; duplication
//!    mints fresh ids for a whole subtree.
//! 2. **Patches merge, never replace**: one shared merge rule across
//!    every style category.
//! 3. **Strict inside, lenient at the edge**: the only tolerated
//!    malformed input is a persisted config, repaired in [`coerce`].

pub mod block;
pub mod coerce;
pub mod config;
pub mod error;
pub mod id;
pub mod merge;
pub mod patch;
pub mod position;
pub mod style;
pub mod walk;

pub use block::{
    Alignment, Block, BlockKind, ButtonVariant, Column, HeaderBackground, ImageFit, ImageSide,
};
pub use coerce::config_from_json;
pub use config::{CompositionConfig, LayoutMode, PageLayout};
pub use error::ModelError;
pub use id::BlockId;
pub use merge::{merge_slot, Field, MergePatch};
pub use patch::{BlockPatch, ColumnPatch};
pub use position::Position;
pub use style::{
    Animation, AnimationKind, AnimationPatch, Background, BackgroundPatch, Overlay, OverlayPatch,
    Spacing, SpacingPatch, Typography, TypographyPatch,
};
pub use walk::{collect_ids, walk_block, walk_block_mut, walk_blocks};
