//! # Composition Config
//!
//! The serializable shape of one composed page or slide: layout mode,
//! page background, the ordered block collection, and the freeform
//! position side-table.
//!
//! In structured mode the block array *is* the ordering. In freeform
//! mode positions fully control placement and array order only breaks
//! z-stacking ties.

use crate::block::{Alignment, Block};
use crate::id::BlockId;
use crate::position::Position;
use crate::style::Background;
use crate::walk::collect_ids;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How blocks are placed on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Structured,
    Freeform,
}

/// Structured-mode page scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PageLayout {
    #[default]
    Default,
    Split,
}

/// One page's composition state. Round-trips exactly through JSON:
/// sparse fields stay absent, ids and ordering are preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct CompositionConfig {
    pub mode: LayoutMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    pub blocks: Vec<Block>,
    // Ordered map keeps serialized output stable across saves.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub positions: BTreeMap<BlockId, Position>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<PageLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_group_align: Option<Alignment>,
}

impl CompositionConfig {
    pub fn new(mode: LayoutMode) -> Self {
        CompositionConfig {
            mode,
            ..Default::default()
        }
    }

    /// Index of a top-level block by id.
    pub fn index_of(&self, id: BlockId) -> Option<usize> {
        self.blocks.iter().position(|block| block.id() == id)
    }

    pub fn block(&self, id: BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| block.id() == id)
    }

    pub fn block_mut(&mut self, id: BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|block| block.id() == id)
    }

    /// Drop position entries whose block no longer exists.
    ///
    /// Stale entries are harmless to the renderer but accumulate in
    /// saves; deletion paths call this.
    pub fn prune_positions(&mut self) {
        let live = collect_ids(&self.blocks);
        self.positions.retain(|id, _| live.contains(id));
    }

    /// Serialize to the wire shape handed to the persistence
    /// collaborator.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("composition config serializes infallibly")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::BlockKind;

    #[test]
    fn test_round_trip_preserves_everything() {
        let mut config = CompositionConfig::new(LayoutMode::Freeform);
        config.blocks.push(Block::new(BlockKind::Header));
        config.blocks.push(Block::new(BlockKind::TwoCol));
        let id = config.blocks[0].id();
        config.positions.insert(
            id,
            Position {
                x_pct: 12.5,
                y_pct: 40.0,
                w_pct: Some(50.0),
                rotate_deg: Some(7.5),
                ..Default::default()
            },
        );
        config.structured_group_align = Some(Alignment::Center);

        let json = config.to_json();
        let back: CompositionConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_sparse_fields_stay_absent() {
        let config = CompositionConfig::new(LayoutMode::Structured);
        let json = config.to_json();
        assert!(json.get("background").is_none());
        assert!(json.get("positions").is_none());
        assert!(json.get("layout").is_none());
    }

    #[test]
    fn test_prune_drops_only_stale_positions() {
        let mut config = CompositionConfig::new(LayoutMode::Freeform);
        config.blocks.push(Block::new(BlockKind::Text));
        let live = config.blocks[0].id();
        let stale = BlockId::new();
        config.positions.insert(live, Position::at(10.0, 10.0));
        config.positions.insert(stale, Position::at(20.0, 20.0));

        config.prune_positions();

        assert!(config.positions.contains_key(&live));
        assert!(!config.positions.contains_key(&stale));
    }
}
