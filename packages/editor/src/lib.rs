//! # Bloq Editor
//!
//! Builder shell for the page composition engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: blocks + styles + positions          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: one page's editing state            │
//! │  - Mutations with validation                │
//! │  - Bounded snapshot undo/redo               │
//! │  - Selection + inspector contract           │
//! │  - Session: persistence + autosave debounce │
//! │  - Gesture commits (one entry per gesture)  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ renderer: config → visual tree (preview)    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core principles
//!
//! 1. **The builder owns the state**: collection, selection, history —
//!    everything else proposes changes
//! 2. **One mutation, one snapshot**: every structural change is one
//!    undo step; selection and pointer previews are free
//! 3. **Collaborators behind traits**: persistence and media upload
//!    are external; their failures are retryable and never corrupt
//!    in-memory state
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bloq_editor::{EditSession, MemoryStore};
//! use bloq_model::BlockKind;
//!
//! let mut session = EditSession::open("landing", store)?;
//! let id = session.builder_mut().add_block(BlockKind::Header);
//! session.builder_mut().undo();
//! if session.autosave_due(now) {
//!     session.save()?;
//! }
//! ```

mod builder;
mod errors;
mod history;
mod inspector;
mod mutations;
mod persist;
mod session;

pub use builder::Builder;
pub use errors::EditorError;
pub use history::{History, DEFAULT_HISTORY_CAP};
pub use inspector::{apply_event, controls_for, Control, InspectorEvent, PanelRequest};
pub use mutations::{Applied, Mutation, MutationError, MoveDirection};
pub use persist::{MediaStore, MemoryMediaStore, MemoryStore, PageStore, StoreError};
pub use session::{EditSession, AUTOSAVE_DEBOUNCE};

// Re-export the surfaces hosts typically need alongside the editor.
pub use bloq_model::{Block, BlockId, BlockKind, BlockPatch, CompositionConfig, Position};
pub use bloq_renderer::{DeviceKind, VisualTree};
pub use bloq_transform::{FrameRect, GestureKind, Handle, Point};
