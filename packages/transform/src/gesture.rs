//! # Gesture Engine
//!
//! Converts raw pointer movement into normalized position updates for
//! one block at a time.
//!
//! ## State machine
//!
//! ```text
//! idle → dragging{move|resize|rotate} → idle
//! ```
//!
//! A gesture begins on pointer-down and captures two things at that
//! instant: the device frame's pixel rectangle and the block's current
//! position. Every later pointer-move is computed against that captured
//! basis — never against the previous sample — so error cannot
//! accumulate over a long drag.
//!
//! Pixel values live only inside an active gesture. What comes out is
//! always a percentage of the frame, valid across frame resizes and
//! breakpoint switches.

use crate::handle::Handle;
use bloq_model::{BlockId, Position};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Pixel floor for block width during resize.
pub const MIN_BLOCK_WIDTH_PX: f64 = 40.0;
/// Pixel floor for block height during resize.
pub const MIN_BLOCK_HEIGHT_PX: f64 = 20.0;

/// Percent size assumed when resizing a block that has no stored size
/// yet.
const DEFAULT_W_PCT: f64 = 30.0;
const DEFAULT_H_PCT: f64 = 10.0;

/// A pointer location in frame-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// The device frame's current pixel rectangle, sampled at gesture
/// start. Supplied by the host viewport; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameRect {
    pub width: f64,
    pub height: f64,
}

impl FrameRect {
    pub fn new(width: f64, height: f64) -> Self {
        FrameRect { width, height }
    }

    /// A frame this small cannot anchor percentage math.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

/// What a gesture does to the block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GestureKind {
    Move,
    Resize { handle: Handle },
    Rotate,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GestureError {
    #[error("device frame has no usable size")]
    DegenerateFrame,
}

/// One in-flight pointer gesture.
#[derive(Debug, Clone)]
pub struct Gesture {
    kind: GestureKind,
    frame: FrameRect,
    origin: Point,
    basis: Position,
    current: Position,
}

impl Gesture {
    /// Capture the gesture basis. Fails on a degenerate frame, which
    /// callers treat as "no gesture started".
    pub fn begin(
        kind: GestureKind,
        frame: FrameRect,
        pointer: Point,
        position: Position,
    ) -> Result<Gesture, GestureError> {
        if frame.is_degenerate() {
            return Err(GestureError::DegenerateFrame);
        }
        let basis = position.clamped();
        Ok(Gesture {
            kind,
            frame,
            origin: pointer,
            basis,
            current: basis,
        })
    }

    pub fn kind(&self) -> GestureKind {
        self.kind
    }

    pub fn basis(&self) -> Position {
        self.basis
    }

    pub fn current(&self) -> Position {
        self.current
    }

    /// Recompute the position for the latest pointer sample. Guarded:
    /// a sample that produces non-finite math leaves the position
    /// unchanged rather than storing NaN.
    pub fn pointer_move(&mut self, pointer: Point) -> Position {
        if !(pointer.x.is_finite() && pointer.y.is_finite()) {
            return self.current;
        }

        let next = match self.kind {
            GestureKind::Move => self.moved_to(pointer),
            GestureKind::Resize { handle } => self.resized_to(handle, pointer),
            GestureKind::Rotate => self.rotated_to(pointer),
        };

        self.current = next.clamped();
        self.current
    }

    /// Pointer-up: the gesture ends and yields the position to commit.
    pub fn finish(self) -> Position {
        self.current
    }

    /// Lost capture: abandon without committing anything.
    pub fn cancel(self) -> Position {
        self.basis
    }

    fn moved_to(&self, pointer: Point) -> Position {
        let dx = pointer.x - self.origin.x;
        let dy = pointer.y - self.origin.y;
        let x_px = self.basis.x_pct / 100.0 * self.frame.width + dx;
        let y_px = self.basis.y_pct / 100.0 * self.frame.height + dy;

        Position {
            x_pct: x_px / self.frame.width * 100.0,
            y_pct: y_px / self.frame.height * 100.0,
            ..self.basis
        }
    }

    fn resized_to(&self, handle: Handle, pointer: Point) -> Position {
        let dx = pointer.x - self.origin.x;
        let dy = pointer.y - self.origin.y;
        let mut next = self.basis;

        if handle.dx_sign() != 0.0 {
            let basis_w_px = self.basis.w_pct.unwrap_or(DEFAULT_W_PCT) / 100.0 * self.frame.width;
            // Floor in pixels before converting back to percent, so a
            // block can never shrink to nothing.
            let w_px = (basis_w_px + dx * handle.dx_sign()).max(MIN_BLOCK_WIDTH_PX);
            next.w_pct = Some(w_px / self.frame.width * 100.0);

            if handle.moves_left_edge() {
                let basis_x_px = self.basis.x_pct / 100.0 * self.frame.width;
                next.x_pct = (basis_x_px + (basis_w_px - w_px)) / self.frame.width * 100.0;
            }
        }

        if handle.dy_sign() != 0.0 {
            let basis_h_px = self.basis.h_pct.unwrap_or(DEFAULT_H_PCT) / 100.0 * self.frame.height;
            let h_px = (basis_h_px + dy * handle.dy_sign()).max(MIN_BLOCK_HEIGHT_PX);
            next.h_pct = Some(h_px / self.frame.height * 100.0);

            if handle.moves_top_edge() {
                let basis_y_px = self.basis.y_pct / 100.0 * self.frame.height;
                next.y_pct = (basis_y_px + (basis_h_px - h_px)) / self.frame.height * 100.0;
            }
        }

        next
    }

    fn rotated_to(&self, pointer: Point) -> Position {
        let w_px = self.basis.w_pct.unwrap_or(DEFAULT_W_PCT) / 100.0 * self.frame.width;
        let h_px = self.basis.h_pct.unwrap_or(DEFAULT_H_PCT) / 100.0 * self.frame.height;
        let center_x = self.basis.x_pct / 100.0 * self.frame.width + w_px / 2.0;
        let center_y = self.basis.y_pct / 100.0 * self.frame.height + h_px / 2.0;

        let angle = (pointer.y - center_y)
            .atan2(pointer.x - center_x)
            .to_degrees();
        if !angle.is_finite() {
            return self.current;
        }

        Position {
            rotate_deg: Some(angle),
            ..self.basis
        }
    }
}

/// Engine owning the single in-flight gesture.
///
/// Only one gesture is active at a time. A pointer-down while another
/// gesture is active abandons the stale one — the equivalent of the
/// implicit pointer-up a lost capture produces.
#[derive(Debug, Default)]
pub struct TransformEngine {
    active: Option<(BlockId, Gesture)>,
}

impl TransformEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn active_block(&self) -> Option<BlockId> {
        self.active.as_ref().map(|(id, _)| *id)
    }

    /// Pointer-down on a block body, resize handle, or rotate handle.
    pub fn begin(
        &mut self,
        block: BlockId,
        kind: GestureKind,
        frame: FrameRect,
        pointer: Point,
        position: Position,
    ) -> Result<(), GestureError> {
        if let Some((stale, _)) = self.active.take() {
            warn!(block = %stale, "abandoning stale gesture on new pointer-down");
        }
        let gesture = Gesture::begin(kind, frame, pointer, position)?;
        debug!(block = %block, kind = ?kind, "gesture started");
        self.active = Some((block, gesture));
        Ok(())
    }

    /// Pointer-move: returns the live position for preview, not for
    /// history.
    pub fn update(&mut self, pointer: Point) -> Option<(BlockId, Position)> {
        let (block, gesture) = self.active.as_mut()?;
        Some((*block, gesture.pointer_move(pointer)))
    }

    /// Pointer-up: final position for exactly one history entry.
    pub fn release(&mut self, pointer: Point) -> Option<(BlockId, Position)> {
        let (block, mut gesture) = self.active.take()?;
        gesture.pointer_move(pointer);
        debug!(block = %block, "gesture finished");
        Some((block, gesture.finish()))
    }

    /// Lost capture: drop the gesture without committing, never stuck
    /// dragging.
    pub fn cancel(&mut self) -> Option<BlockId> {
        let (block, gesture) = self.active.take()?;
        debug!(block = %block, "gesture cancelled");
        let _ = gesture.cancel();
        Some(block)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> FrameRect {
        FrameRect::new(1000.0, 800.0)
    }

    #[test]
    fn test_move_converts_pixels_to_percent() {
        let mut gesture = Gesture::begin(
            GestureKind::Move,
            frame(),
            Point::new(500.0, 400.0),
            Position::at(50.0, 50.0),
        )
        .unwrap();

        let position = gesture.pointer_move(Point::new(600.0, 480.0));
        assert_eq!(position.x_pct, 60.0);
        assert_eq!(position.y_pct, 60.0);
    }

    #[test]
    fn test_move_clamps_to_frame() {
        let mut gesture = Gesture::begin(
            GestureKind::Move,
            frame(),
            Point::new(500.0, 400.0),
            Position::at(50.0, 50.0),
        )
        .unwrap();

        let position = gesture.pointer_move(Point::new(-2000.0, 5000.0));
        assert_eq!(position.x_pct, 0.0);
        assert_eq!(position.y_pct, 100.0);
    }

    #[test]
    fn test_deltas_are_relative_to_basis_not_last_sample() {
        let mut gesture = Gesture::begin(
            GestureKind::Move,
            frame(),
            Point::new(500.0, 400.0),
            Position::at(50.0, 50.0),
        )
        .unwrap();

        gesture.pointer_move(Point::new(900.0, 700.0));
        // Returning the pointer to its origin restores the basis
        // exactly; a sample-to-sample integration would have drifted.
        let position = gesture.pointer_move(Point::new(500.0, 400.0));
        assert_eq!(position, Position::at(50.0, 50.0));
    }

    #[test]
    fn test_east_resize_grows_width_only() {
        let basis = Position {
            x_pct: 10.0,
            y_pct: 10.0,
            w_pct: Some(20.0),
            h_pct: Some(25.0),
            ..Default::default()
        };
        let mut gesture = Gesture::begin(
            GestureKind::Resize {
                handle: Handle::East,
            },
            frame(),
            Point::new(300.0, 200.0),
            basis,
        )
        .unwrap();

        let position = gesture.pointer_move(Point::new(400.0, 999.0));
        // 200px basis width + 100px dx = 300px of a 1000px frame.
        assert_eq!(position.w_pct, Some(30.0));
        assert_eq!(position.h_pct, Some(25.0));
        assert_eq!(position.x_pct, 10.0);
    }

    #[test]
    fn test_resize_enforces_pixel_floor() {
        let basis = Position {
            x_pct: 10.0,
            y_pct: 10.0,
            w_pct: Some(20.0),
            h_pct: Some(25.0),
            ..Default::default()
        };
        let mut gesture = Gesture::begin(
            GestureKind::Resize {
                handle: Handle::East,
            },
            frame(),
            Point::new(300.0, 200.0),
            basis,
        )
        .unwrap();

        // Drag far past zero width: 40px floor of a 1000px frame.
        let position = gesture.pointer_move(Point::new(-600.0, 200.0));
        assert_eq!(position.w_pct, Some(4.0));
    }

    #[test]
    fn test_west_resize_shifts_left_edge() {
        let basis = Position {
            x_pct: 30.0,
            y_pct: 10.0,
            w_pct: Some(20.0),
            h_pct: Some(25.0),
            ..Default::default()
        };
        let mut gesture = Gesture::begin(
            GestureKind::Resize {
                handle: Handle::West,
            },
            frame(),
            Point::new(300.0, 200.0),
            basis,
        )
        .unwrap();

        // Dragging the west handle 100px left grows width and moves x.
        let position = gesture.pointer_move(Point::new(200.0, 200.0));
        assert_eq!(position.w_pct, Some(30.0));
        assert_eq!(position.x_pct, 20.0);
    }

    #[test]
    fn test_corner_resize_grows_both_axes() {
        let basis = Position {
            x_pct: 10.0,
            y_pct: 10.0,
            w_pct: Some(20.0),
            h_pct: Some(25.0),
            ..Default::default()
        };
        let mut gesture = Gesture::begin(
            GestureKind::Resize {
                handle: Handle::SouthEast,
            },
            frame(),
            Point::new(300.0, 280.0),
            basis,
        )
        .unwrap();

        let position = gesture.pointer_move(Point::new(400.0, 360.0));
        assert_eq!(position.w_pct, Some(30.0));
        // 200px basis height + 80px dy = 280px of an 800px frame.
        assert_eq!(position.h_pct, Some(35.0));
    }

    #[test]
    fn test_rotate_uses_two_argument_arctangent() {
        let basis = Position {
            x_pct: 40.0,
            y_pct: 40.0,
            w_pct: Some(20.0),
            h_pct: Some(25.0),
            ..Default::default()
        };
        // Block center: (400 + 100, 320 + 100) = (500, 420).
        let mut gesture = Gesture::begin(
            GestureKind::Rotate,
            frame(),
            Point::new(500.0, 300.0),
            basis,
        )
        .unwrap();

        let east = gesture.pointer_move(Point::new(700.0, 420.0));
        assert!(east.rotate_deg.unwrap().abs() < 1e-9);

        let south = gesture.pointer_move(Point::new(500.0, 600.0));
        assert!((south.rotate_deg.unwrap() - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_frame_refuses_gesture() {
        let result = Gesture::begin(
            GestureKind::Move,
            FrameRect::new(0.0, 600.0),
            Point::default(),
            Position::at(10.0, 10.0),
        );
        assert_eq!(result.unwrap_err(), GestureError::DegenerateFrame);
    }

    #[test]
    fn test_non_finite_pointer_is_a_no_op() {
        let mut gesture = Gesture::begin(
            GestureKind::Move,
            frame(),
            Point::new(500.0, 400.0),
            Position::at(50.0, 50.0),
        )
        .unwrap();

        let before = gesture.pointer_move(Point::new(600.0, 400.0));
        let after = gesture.pointer_move(Point::new(f64::NAN, 400.0));
        assert_eq!(before, after);
    }

    #[test]
    fn test_engine_release_ends_gesture() {
        let mut engine = TransformEngine::new();
        let block = BlockId::new();
        engine
            .begin(
                block,
                GestureKind::Move,
                frame(),
                Point::new(100.0, 100.0),
                Position::at(0.0, 0.0),
            )
            .unwrap();
        assert!(engine.is_active());

        let (released, position) = engine.release(Point::new(200.0, 100.0)).unwrap();
        assert_eq!(released, block);
        assert_eq!(position.x_pct, 10.0);
        assert!(!engine.is_active());
        assert!(engine.release(Point::default()).is_none());
    }

    #[test]
    fn test_engine_cancel_never_leaves_stuck_dragging() {
        let mut engine = TransformEngine::new();
        let block = BlockId::new();
        engine
            .begin(
                block,
                GestureKind::Rotate,
                frame(),
                Point::default(),
                Position::at(0.0, 0.0),
            )
            .unwrap();

        assert_eq!(engine.cancel(), Some(block));
        assert!(!engine.is_active());
        assert_eq!(engine.cancel(), None);
    }

    #[test]
    fn test_new_pointer_down_replaces_stale_gesture() {
        let mut engine = TransformEngine::new();
        let first = BlockId::new();
        let second = BlockId::new();
        engine
            .begin(
                first,
                GestureKind::Move,
                frame(),
                Point::default(),
                Position::at(0.0, 0.0),
            )
            .unwrap();
        engine
            .begin(
                second,
                GestureKind::Move,
                frame(),
                Point::default(),
                Position::at(5.0, 5.0),
            )
            .unwrap();

        assert_eq!(engine.active_block(), Some(second));
    }
}
