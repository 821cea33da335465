//! # Bloq Transform
//!
//! Pointer-gesture engine for the freeform canvas.
//!
//! ## Architecture
//!
//! ```text
//! host viewport ──► FrameRect (sampled at gesture start)
//! pointer events ─► TransformEngine ─► Position updates (percent)
//!                                         │
//!                                         ▼ on release
//!                                  builder.commit_position()
//! ```
//!
//! The engine never mutates editor state; it proposes positions. The
//! builder records exactly one history entry per completed gesture —
//! intermediate pointer-move samples are preview-only.

pub mod gesture;
pub mod handle;

pub use gesture::{
    FrameRect, Gesture, GestureError, GestureKind, Point, TransformEngine, MIN_BLOCK_HEIGHT_PX,
    MIN_BLOCK_WIDTH_PX,
};
pub use handle::Handle;
