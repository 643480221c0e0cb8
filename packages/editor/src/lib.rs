//! # WebCraft Editor
//!
//! Block editing engine for the WebCraft page builder.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ model: blocks, styles, template catalog     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: document + mutations                │
//! │  - Add / update / delete / move blocks      │
//! │  - Position invariant on every mutation     │
//! │  - Drag-and-drop reorder state machine      │
//! │  - Selection and style panel state          │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ sync: document ⇄ remote store records       │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Document is source of truth**: the UI renders `blocks()` in order
//! 2. **Synchronous mutations**: no mutation ever races another
//! 3. **Defensive no-ops**: edits to a block that is gone are ignored
//! 4. **Pure gesture tracking**: the drag machine only moves on drop
//!
//! ## Usage
//!
//! ```rust,ignore
//! use webcraft_editor::{BlockDocument, EditSession, BlockUpdate};
//! use webcraft_model::builtin_template;
//!
//! let mut session = EditSession::new("tab-1", BlockDocument::new("Portfolio"));
//!
//! let added = session.add_block(builtin_template("hero-modern").unwrap())?;
//! session.update_block(&added.block.id, BlockUpdate::content_field("title", "Hi!"))?;
//!
//! // Drag the hero below the next block
//! session.drag_start(0)?;
//! session.drag_over(1);
//! session.drop()?;
//! ```

mod document;
mod drag;
mod errors;
mod mutations;
mod session;

pub use document::{BlockDocument, DocumentMeta, ThemeSettings};
pub use drag::{BlockMove, DragEndPolicy, DragIndicator, DragReorder, DragState, Reorder};
pub use errors::EditorError;
pub use mutations::{BlockUpdate, Mutation, MutationError, MutationResult};
pub use session::{AddedBlock, EditSession};
