//! Remote store seam.
//!
//! The backend is a hosted table store scoped per user. Only the queries the
//! builder needs are modelled; every call is a single round trip.

mod data;
mod file;
mod memory;

use async_trait::async_trait;
use webcraft_model::{MessageId, UserId, WebsiteId};

use crate::errors::StoreResult;
use crate::records::{
    ChatMessageRecord, ChatMessageUpdate, CustomBlockRecord, NewChatMessage, NewCustomBlock,
    WebsiteDraft, WebsiteRecord,
};

pub use file::FileStore;
pub use memory::MemoryStore;

#[async_trait]
pub trait RemoteStore: Send + Sync {
    // ========================================================================
    // Websites
    // ========================================================================

    /// Most recently updated website of `user`; `NotFound` if there is none.
    async fn latest_website(&self, user: &UserId) -> StoreResult<WebsiteRecord>;

    /// Insert a website; the store assigns the id.
    async fn create_website(&self, draft: WebsiteDraft) -> StoreResult<WebsiteRecord>;

    /// Overwrite the website with `id`. `NotFound` if it does not exist.
    async fn update_website(&self, id: &WebsiteId, draft: WebsiteDraft)
        -> StoreResult<WebsiteRecord>;

    // ========================================================================
    // Custom blocks
    // ========================================================================

    /// Custom blocks of `user`, oldest first.
    async fn list_custom_blocks(&self, user: &UserId) -> StoreResult<Vec<CustomBlockRecord>>;

    async fn insert_custom_block(&self, block: NewCustomBlock) -> StoreResult<CustomBlockRecord>;

    // ========================================================================
    // Chat
    // ========================================================================

    async fn insert_chat_message(&self, message: NewChatMessage)
        -> StoreResult<ChatMessageRecord>;

    async fn update_chat_message(
        &self,
        id: &MessageId,
        update: ChatMessageUpdate,
    ) -> StoreResult<ChatMessageRecord>;

    /// Chat history of `user` ordered by creation time.
    async fn list_chat_messages(&self, user: &UserId) -> StoreResult<Vec<ChatMessageRecord>>;
}
