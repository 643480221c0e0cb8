use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;
use webcraft_model::{MessageId, UserId, WebsiteId};

use super::data::Tables;
use super::RemoteStore;
use crate::errors::StoreResult;
use crate::records::{
    ChatMessageRecord, ChatMessageUpdate, CustomBlockRecord, NewChatMessage, NewCustomBlock,
    WebsiteDraft, WebsiteRecord,
};

/// Store persisted as a single JSON file.
///
/// Every call reads the file; writes replace it whole. A missing file is an
/// empty store. Calls on one `FileStore` are serialized.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> StoreResult<Tables> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(Tables::default()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Tables::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn persist(&self, tables: &Tables) -> StoreResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_vec_pretty(tables)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;
        debug!(path = %self.path.display(), "store written");
        Ok(())
    }

    async fn query<T>(&self, f: impl FnOnce(&Tables) -> StoreResult<T>) -> StoreResult<T> {
        let _lock = self.lock.lock().await;
        let tables = self.load().await?;
        f(&tables)
    }

    async fn modify<T>(&self, f: impl FnOnce(&mut Tables) -> StoreResult<T>) -> StoreResult<T> {
        let _lock = self.lock.lock().await;
        let mut tables = self.load().await?;
        let out = f(&mut tables)?;
        self.persist(&tables).await?;
        Ok(out)
    }
}

#[async_trait]
impl RemoteStore for FileStore {
    async fn latest_website(&self, user: &UserId) -> StoreResult<WebsiteRecord> {
        self.query(|t| t.latest_website(user)).await
    }

    async fn create_website(&self, draft: WebsiteDraft) -> StoreResult<WebsiteRecord> {
        self.modify(|t| t.create_website(draft)).await
    }

    async fn update_website(
        &self,
        id: &WebsiteId,
        draft: WebsiteDraft,
    ) -> StoreResult<WebsiteRecord> {
        self.modify(|t| t.update_website(id, draft)).await
    }

    async fn list_custom_blocks(&self, user: &UserId) -> StoreResult<Vec<CustomBlockRecord>> {
        self.query(|t| Ok(t.list_custom_blocks(user))).await
    }

    async fn insert_custom_block(&self, block: NewCustomBlock) -> StoreResult<CustomBlockRecord> {
        self.modify(|t| Ok(t.insert_custom_block(block))).await
    }

    async fn insert_chat_message(
        &self,
        message: NewChatMessage,
    ) -> StoreResult<ChatMessageRecord> {
        self.modify(|t| Ok(t.insert_chat_message(message))).await
    }

    async fn update_chat_message(
        &self,
        id: &MessageId,
        update: ChatMessageUpdate,
    ) -> StoreResult<ChatMessageRecord> {
        self.modify(|t| t.update_chat_message(id, update)).await
    }

    async fn list_chat_messages(&self, user: &UserId) -> StoreResult<Vec<ChatMessageRecord>> {
        self.query(|t| Ok(t.list_chat_messages(user))).await
    }
}
