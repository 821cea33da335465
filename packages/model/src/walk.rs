//! Traversal over nested block trees.
//!
//! Only `twoCol` nests further blocks today, but id collection,
//! validation, and position pruning all go through these walkers so a
//! future nesting variant cannot be missed in one of them.

use crate::block::Block;
use crate::id::BlockId;
use std::collections::HashSet;

/// Visit `block` and every nested block, depth-first.
pub fn walk_block<'a>(block: &'a Block, visit: &mut impl FnMut(&'a Block)) {
    visit(block);
    if let Block::TwoCol { left, right, .. } = block {
        for column in [left, right] {
            if let Some(text) = &column.text {
                walk_block(text, visit);
            }
            if let Some(image) = &column.image {
                walk_block(image, visit);
            }
        }
    }
}

/// Visit every block of a collection, including nested ones.
pub fn walk_blocks<'a>(blocks: &'a [Block], visit: &mut impl FnMut(&'a Block)) {
    for block in blocks {
        walk_block(block, visit);
    }
}

/// Mutable traversal.
pub fn walk_block_mut(block: &mut Block, visit: &mut impl FnMut(&mut Block)) {
    visit(block);
    if let Block::TwoCol { left, right, .. } = block {
        for column in [left, right] {
            if let Some(text) = &mut column.text {
                walk_block_mut(text, visit);
            }
            if let Some(image) = &mut column.image {
                walk_block_mut(image, visit);
            }
        }
    }
}

/// All ids present anywhere in the collection, nested blocks included.
pub fn collect_ids(blocks: &[Block]) -> HashSet<BlockId> {
    let mut ids = HashSet::new();
    walk_blocks(blocks, &mut |block| {
        ids.insert(block.id());
    });
    ids
}
