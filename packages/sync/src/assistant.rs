//! # Chat Assistant
//!
//! Sends a prompt to the AI generation endpoint and records the exchange.
//!
//! A prompt is stored as a chat message before the endpoint is called. The
//! endpoint reply is written back onto that message; when the endpoint
//! created a custom block, the reply carries its id. A failed call leaves the
//! message without a response.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use webcraft_model::{CustomBlockId, MessageId, TemplateId};

use crate::context::UserContext;
use crate::errors::{AssistantError, Notification, SyncError};
use crate::in_flight::{InFlight, Operation};
use crate::records::{ChatMessageRecord, ChatMessageUpdate, NewChatMessage};
use crate::store::RemoteStore;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub message: String,
    pub message_id: MessageId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub response: String,
    #[serde(default)]
    pub is_generating_block: bool,
    #[serde(default)]
    pub block_id: Option<CustomBlockId>,
}

/// The text-generation endpoint
#[async_trait]
pub trait AiEndpoint: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, AssistantError>;
}

/// Outcome of one prompt
#[derive(Debug, Clone)]
pub struct AssistantReply {
    pub message: ChatMessageRecord,
    /// Library id of the block the assistant created, if any
    pub created_template: Option<TemplateId>,
}

impl AssistantReply {
    /// Notice to show when the assistant added a block to the library
    pub fn notification(&self) -> Option<Notification> {
        self.created_template
            .as_ref()
            .map(|_| Notification::block_created())
    }
}

pub struct ChatAssistant {
    store: Arc<dyn RemoteStore>,
    endpoint: Arc<dyn AiEndpoint>,
    in_flight: InFlight,
}

impl ChatAssistant {
    pub fn new(store: Arc<dyn RemoteStore>, endpoint: Arc<dyn AiEndpoint>) -> Self {
        Self::with_in_flight(store, endpoint, InFlight::new())
    }

    pub fn with_in_flight(
        store: Arc<dyn RemoteStore>,
        endpoint: Arc<dyn AiEndpoint>,
        in_flight: InFlight,
    ) -> Self {
        Self {
            store,
            endpoint,
            in_flight,
        }
    }

    #[instrument(skip_all, fields(user = ?ctx.user))]
    pub async fn send(&self, ctx: &UserContext, prompt: &str) -> Result<AssistantReply, SyncError> {
        if prompt.trim().is_empty() {
            return Err(SyncError::EmptyPrompt);
        }
        let user = ctx.require_user()?;
        let _guard = self.in_flight.begin(Operation::Assistant)?;

        let message = self
            .store
            .insert_chat_message(NewChatMessage {
                user_id: user.clone(),
                message: prompt.to_string(),
            })
            .await?;

        let reply = self
            .endpoint
            .generate(GenerateRequest {
                message: message.message.clone(),
                message_id: message.id.clone(),
            })
            .await
            .map_err(|e| {
                warn!(message = %message.id, error = %e, "AI endpoint failed");
                e
            })?;

        let message = self
            .store
            .update_chat_message(
                &message.id,
                ChatMessageUpdate {
                    response: reply.response,
                    is_generating_block: reply.is_generating_block,
                    block_id: reply.block_id.clone(),
                },
            )
            .await?;

        let created_template = match (reply.is_generating_block, &reply.block_id) {
            (true, Some(block_id)) => {
                info!(block = %block_id, "assistant created a block");
                Some(TemplateId::custom(block_id))
            }
            _ => None,
        };

        Ok(AssistantReply {
            message,
            created_template,
        })
    }

    /// Chat history, oldest first
    pub async fn history(&self, ctx: &UserContext) -> Result<Vec<ChatMessageRecord>, SyncError> {
        let user = ctx.require_user()?;
        Ok(self.store.list_chat_messages(user).await?)
    }
}
