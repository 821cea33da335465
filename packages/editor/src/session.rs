//! # Edit Session
//!
//! One operator editing one page: a [`Builder`] plus the persistence
//! collaborator, the gesture engine, and the autosave debounce.
//!
//! Everything here is synchronous and cooperative. The session never
//! blocks: it only *reports* when an autosave is due; the host decides
//! when to call [`EditSession::save`], typically from its idle tick.
//! A failed save leaves the builder's collection and history untouched
//! and surfaces a retryable error.

use crate::builder::Builder;
use crate::persist::PageStore;
use crate::EditorError;
use bloq_model::BlockId;
use bloq_transform::{FrameRect, GestureKind, Point, TransformEngine};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Quiet period after the last mutation before autosave fires.
pub const AUTOSAVE_DEBOUNCE: Duration = Duration::from_secs(2);

pub struct EditSession<S: PageStore> {
    page_id: String,
    builder: Builder,
    store: S,
    engine: TransformEngine,
    autosave_after: Duration,
    saved_version: u64,
    observed_version: u64,
    quiet_since: Option<Instant>,
}

impl<S: PageStore> EditSession<S> {
    /// Load the page and start editing. The loaded config becomes the
    /// history base: the undo stack starts empty.
    pub fn open(page_id: impl Into<String>, store: S) -> Result<Self, EditorError> {
        let page_id = page_id.into();
        let config = store.load(&page_id)?;
        debug!(page = %page_id, blocks = config.blocks.len(), "session opened");
        Ok(EditSession {
            page_id,
            builder: Builder::new(config),
            store,
            engine: TransformEngine::new(),
            autosave_after: AUTOSAVE_DEBOUNCE,
            saved_version: 0,
            observed_version: 0,
            quiet_since: None,
        })
    }

    pub fn with_autosave_after(mut self, after: Duration) -> Self {
        self.autosave_after = after;
        self
    }

    pub fn page_id(&self) -> &str {
        &self.page_id
    }

    pub fn builder(&self) -> &Builder {
        &self.builder
    }

    pub fn builder_mut(&mut self) -> &mut Builder {
        &mut self.builder
    }

    /// Unsaved changes exist.
    pub fn is_dirty(&self) -> bool {
        self.builder.version() != self.saved_version
    }

    /// Persist the current state. On failure nothing in memory
    /// changes; the caller surfaces the retryable error to the user.
    pub fn save(&mut self) -> Result<(), EditorError> {
        let version = self.builder.version();
        self.store.save(&self.page_id, self.builder.config())?;
        self.saved_version = version;
        debug!(page = %self.page_id, version, "saved");
        Ok(())
    }

    /// Idle tick: true when the debounced autosave should fire. The
    /// debounce restarts whenever a new mutation lands.
    pub fn autosave_due(&mut self, now: Instant) -> bool {
        if self.builder.version() != self.observed_version {
            self.observed_version = self.builder.version();
            self.quiet_since = Some(now);
        }
        self.is_dirty()
            && self
                .quiet_since
                .is_some_and(|since| now.duration_since(since) >= self.autosave_after)
    }

    /// Pointer-down on a block body or handle. Returns whether a
    /// gesture actually started; a degenerate frame quietly refuses.
    pub fn pointer_down(
        &mut self,
        block: BlockId,
        kind: GestureKind,
        frame: FrameRect,
        pointer: Point,
    ) -> bool {
        let position = self
            .builder
            .config()
            .positions
            .get(&block)
            .copied()
            .unwrap_or_default();
        match self.engine.begin(block, kind, frame, pointer, position) {
            Ok(()) => true,
            Err(error) => {
                warn!(%error, "gesture refused");
                false
            }
        }
    }

    /// Pointer-move: live position for preview only. Nothing is
    /// committed and nothing enters history.
    pub fn pointer_move(&mut self, pointer: Point) -> Option<(BlockId, bloq_model::Position)> {
        self.engine.update(pointer)
    }

    /// Pointer-up: commits the finished gesture as exactly one history
    /// entry.
    pub fn pointer_up(&mut self, pointer: Point) -> Result<Option<BlockId>, EditorError> {
        match self.engine.release(pointer) {
            Some((block, position)) => {
                self.builder.commit_position(block, position)?;
                Ok(Some(block))
            }
            None => Ok(None),
        }
    }

    /// Lost pointer capture: abandon the gesture cleanly, as if the
    /// pointer had been released without effect.
    pub fn pointer_cancel(&mut self) {
        self.engine.cancel();
    }
}
