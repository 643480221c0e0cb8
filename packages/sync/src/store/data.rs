//! Table contents shared by the in-memory and file-backed stores.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use webcraft_model::{CustomBlockId, MessageId, UserId, WebsiteId};

use crate::errors::{StoreError, StoreResult};
use crate::records::{
    ChatMessageRecord, ChatMessageUpdate, CustomBlockRecord, NewChatMessage, NewCustomBlock,
    WebsiteDraft, WebsiteRecord,
};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub(crate) struct Tables {
    #[serde(default)]
    pub websites: Vec<WebsiteRecord>,
    #[serde(default)]
    pub custom_blocks: Vec<CustomBlockRecord>,
    #[serde(default)]
    pub chat_messages: Vec<ChatMessageRecord>,
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

impl Tables {
    pub fn latest_website(&self, user: &UserId) -> StoreResult<WebsiteRecord> {
        self.websites
            .iter()
            .filter(|w| &w.user_id == user)
            .max_by_key(|w| w.updated_at)
            .cloned()
            .ok_or_else(|| StoreError::not_found(format!("website for user {}", user)))
    }

    pub fn create_website(&mut self, draft: WebsiteDraft) -> StoreResult<WebsiteRecord> {
        if draft.name.trim().is_empty() {
            return Err(StoreError::Validation("website name is required".into()));
        }
        let record = draft.into_record(WebsiteId::from(new_id()));
        self.websites.push(record.clone());
        Ok(record)
    }

    pub fn update_website(
        &mut self,
        id: &WebsiteId,
        draft: WebsiteDraft,
    ) -> StoreResult<WebsiteRecord> {
        let slot = self
            .websites
            .iter_mut()
            .find(|w| &w.id == id)
            .ok_or_else(|| StoreError::not_found(format!("website {}", id)))?;

        if slot.user_id != draft.user_id {
            return Err(StoreError::Permission(format!(
                "website {} belongs to another user",
                id
            )));
        }
        *slot = draft.into_record(id.clone());
        Ok(slot.clone())
    }

    pub fn list_custom_blocks(&self, user: &UserId) -> Vec<CustomBlockRecord> {
        let mut blocks: Vec<_> = self
            .custom_blocks
            .iter()
            .filter(|b| &b.user_id == user)
            .cloned()
            .collect();
        blocks.sort_by_key(|b| b.created_at);
        blocks
    }

    pub fn insert_custom_block(&mut self, block: NewCustomBlock) -> CustomBlockRecord {
        let record = CustomBlockRecord {
            id: CustomBlockId::from(new_id()),
            user_id: block.user_id,
            name: block.name,
            content: block.content,
            styles: block.styles,
            preview: block.preview,
            created_at: Utc::now(),
        };
        self.custom_blocks.push(record.clone());
        record
    }

    pub fn insert_chat_message(&mut self, message: NewChatMessage) -> ChatMessageRecord {
        let record = ChatMessageRecord {
            id: MessageId::from(new_id()),
            user_id: message.user_id,
            message: message.message,
            response: None,
            is_generating_block: false,
            block_id: None,
            created_at: Utc::now(),
        };
        self.chat_messages.push(record.clone());
        record
    }

    pub fn update_chat_message(
        &mut self,
        id: &MessageId,
        update: ChatMessageUpdate,
    ) -> StoreResult<ChatMessageRecord> {
        let record = self
            .chat_messages
            .iter_mut()
            .find(|m| &m.id == id)
            .ok_or_else(|| StoreError::not_found(format!("chat message {}", id)))?;

        record.response = Some(update.response);
        record.is_generating_block = update.is_generating_block;
        record.block_id = update.block_id;
        Ok(record.clone())
    }

    pub fn list_chat_messages(&self, user: &UserId) -> Vec<ChatMessageRecord> {
        let mut messages: Vec<_> = self
            .chat_messages
            .iter()
            .filter(|m| &m.user_id == user)
            .cloned()
            .collect();
        messages.sort_by_key(|m| m.created_at);
        messages
    }
}
