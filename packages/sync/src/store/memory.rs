use std::sync::{
    atomic::{AtomicBool, Ordering},
    RwLock, RwLockReadGuard, RwLockWriteGuard,
};

use async_trait::async_trait;
use webcraft_model::{MessageId, UserId, WebsiteId};

use super::data::Tables;
use super::RemoteStore;
use crate::errors::{StoreError, StoreResult};
use crate::records::{
    ChatMessageRecord, ChatMessageUpdate, CustomBlockRecord, NewChatMessage, NewCustomBlock,
    WebsiteDraft, WebsiteRecord,
};

/// In-memory store.
///
/// Thread-safe via internal `RwLock`. All data is lost when dropped.
/// [`set_offline`](Self::set_offline) makes every call fail with a network
/// error.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
    offline: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of website records across all users
    pub fn website_count(&self) -> usize {
        self.tables
            .read()
            .map(|t| t.websites.len())
            .unwrap_or_default()
    }

    fn check_online(&self) -> StoreResult<()> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Network("store unreachable".into()));
        }
        Ok(())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Tables>> {
        self.check_online()?;
        self.tables
            .read()
            .map_err(|_| StoreError::Network("lock poisoned".into()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Tables>> {
        self.check_online()?;
        self.tables
            .write()
            .map_err(|_| StoreError::Network("lock poisoned".into()))
    }
}

#[async_trait]
impl RemoteStore for MemoryStore {
    async fn latest_website(&self, user: &UserId) -> StoreResult<WebsiteRecord> {
        self.read()?.latest_website(user)
    }

    async fn create_website(&self, draft: WebsiteDraft) -> StoreResult<WebsiteRecord> {
        self.write()?.create_website(draft)
    }

    async fn update_website(
        &self,
        id: &WebsiteId,
        draft: WebsiteDraft,
    ) -> StoreResult<WebsiteRecord> {
        self.write()?.update_website(id, draft)
    }

    async fn list_custom_blocks(&self, user: &UserId) -> StoreResult<Vec<CustomBlockRecord>> {
        Ok(self.read()?.list_custom_blocks(user))
    }

    async fn insert_custom_block(&self, block: NewCustomBlock) -> StoreResult<CustomBlockRecord> {
        Ok(self.write()?.insert_custom_block(block))
    }

    async fn insert_chat_message(
        &self,
        message: NewChatMessage,
    ) -> StoreResult<ChatMessageRecord> {
        Ok(self.write()?.insert_chat_message(message))
    }

    async fn update_chat_message(
        &self,
        id: &MessageId,
        update: ChatMessageUpdate,
    ) -> StoreResult<ChatMessageRecord> {
        self.write()?.update_chat_message(id, update)
    }

    async fn list_chat_messages(&self, user: &UserId) -> StoreResult<Vec<ChatMessageRecord>> {
        Ok(self.read()?.list_chat_messages(user))
    }
}
