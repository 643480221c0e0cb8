//! # WebCraft Sync
//!
//! Remote side of the builder: the store seam, loading and saving the
//! document, publishing, the custom template library and the AI assistant.
//!
//! ## Architecture
//!
//! ```text
//! WebsiteBuilder
//!   ├── EditSession        (webcraft-editor, synchronous)
//!   ├── TemplateLibrary    (webcraft-model)
//!   ├── SyncBoundary ──┐
//!   └── ChatAssistant ─┼──▶ dyn RemoteStore  (MemoryStore | FileStore)
//!          │           │
//!          └──▶ dyn AiEndpoint
//!   InFlight: one document slot (load/save/publish), one assistant slot
//! ```

mod assistant;
mod boundary;
mod builder;
mod context;
mod errors;
mod in_flight;
mod records;
mod store;

pub use assistant::{AiEndpoint, AssistantReply, ChatAssistant, GenerateRequest, GenerateResponse};
pub use boundary::{publish_slug, SyncBoundary};
pub use builder::{WebsiteBuilder, DEFAULT_SITE_NAME};
pub use context::UserContext;
pub use errors::{AssistantError, Notification, StoreError, StoreResult, SyncError};
pub use in_flight::{InFlight, InFlightGuard, Operation};
pub use records::{
    ChatMessageRecord, ChatMessageUpdate, CustomBlockRecord, NewChatMessage, NewCustomBlock,
    WebsiteDraft, WebsiteRecord,
};
pub use store::{FileStore, MemoryStore, RemoteStore};
