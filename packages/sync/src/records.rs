//! Store record shapes. Field names are the backend's column names.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use webcraft_editor::{BlockDocument, DocumentMeta, ThemeSettings};
use webcraft_model::{
    Block, BlockContent, BlockStyles, BlockTemplate, BlockType, CustomBlockId, MessageId,
    TemplateCategory, TemplateId, UserId, WebsiteId,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteRecord {
    pub id: WebsiteId,
    pub user_id: UserId,
    pub name: String,
    #[serde(default)]
    pub blocks: Vec<Block>,
    #[serde(default)]
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_url: Option<String>,
    #[serde(default)]
    pub theme_settings: ThemeSettings,
    pub updated_at: DateTime<Utc>,
}

/// Website record without its id, as sent on create and update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteDraft {
    pub user_id: UserId,
    pub name: String,
    pub blocks: Vec<Block>,
    pub published: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_url: Option<String>,
    pub theme_settings: ThemeSettings,
    pub updated_at: DateTime<Utc>,
}

impl WebsiteDraft {
    pub fn from_document(user_id: &UserId, doc: &BlockDocument, updated_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user_id.clone(),
            name: doc.meta.name.clone(),
            blocks: doc.blocks().to_vec(),
            published: doc.meta.published,
            publish_url: doc.meta.publish_url.clone(),
            theme_settings: doc.meta.theme.clone(),
            updated_at,
        }
    }

    pub fn into_record(self, id: WebsiteId) -> WebsiteRecord {
        WebsiteRecord {
            id,
            user_id: self.user_id,
            name: self.name,
            blocks: self.blocks,
            published: self.published,
            publish_url: self.publish_url,
            theme_settings: self.theme_settings,
            updated_at: self.updated_at,
        }
    }
}

impl WebsiteRecord {
    pub fn meta(&self) -> DocumentMeta {
        DocumentMeta {
            remote_id: Some(self.id.clone()),
            name: self.name.clone(),
            published: self.published,
            publish_url: self.publish_url.clone(),
            updated_at: Some(self.updated_at),
            theme: self.theme_settings.clone(),
        }
    }

    pub fn into_document(self) -> BlockDocument {
        let meta = self.meta();
        BlockDocument::from_parts(meta, self.blocks)
    }
}

/// AI-generated block saved to the user's library
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomBlockRecord {
    pub id: CustomBlockId,
    pub user_id: UserId,
    pub name: String,
    #[serde(default)]
    pub content: Value,
    #[serde(default)]
    pub styles: BlockStyles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCustomBlock {
    pub user_id: UserId,
    pub name: String,
    pub content: Value,
    #[serde(default)]
    pub styles: BlockStyles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl CustomBlockRecord {
    /// Library entry for this record, namespaced under `custom-`
    pub fn to_template(&self) -> BlockTemplate {
        let id = TemplateId::custom(&self.id);
        let block_type = BlockType::from(id.as_str());
        BlockTemplate {
            content: BlockContent::decode(&block_type, self.content.clone()),
            id,
            name: self.name.clone(),
            icon: "✨".to_string(),
            category: TemplateCategory::Custom,
            preview: self
                .preview
                .clone()
                .unwrap_or_else(|| "AI generated block".to_string()),
            styles: self.styles.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessageRecord {
    pub id: MessageId,
    pub user_id: UserId,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default)]
    pub is_generating_block: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_id: Option<CustomBlockId>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewChatMessage {
    pub user_id: UserId,
    pub message: String,
}

/// Columns written once the AI has answered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessageUpdate {
    pub response: String,
    pub is_generating_block: bool,
    pub block_id: Option<CustomBlockId>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_website_record_wire_format() {
        let record: WebsiteRecord = serde_json::from_value(json!({
            "id": "site-1",
            "user_id": "user-1",
            "name": "Portfolio",
            "blocks": [
                {"id": "block-b", "type": "footer-simple", "content": {"text": "bye"}, "position": 1},
                {"id": "block-a", "type": "hero-modern", "content": {"title": "hi"}, "position": 0}
            ],
            "published": false,
            "theme_settings": {"theme": "dark"},
            "updated_at": "2024-03-01T10:00:00Z"
        }))
        .unwrap();

        assert!(record.publish_url.is_none());
        let doc = record.into_document();
        assert_eq!(doc.blocks()[0].id.as_str(), "block-a");
        assert_eq!(doc.meta.theme.theme, "dark");
        assert_eq!(doc.meta.remote_id, Some(WebsiteId::from("site-1")));
        assert!(!doc.is_dirty());
    }

    #[test]
    fn test_custom_record_becomes_namespaced_template() {
        let record = CustomBlockRecord {
            id: CustomBlockId::from("42"),
            user_id: UserId::from("user-1"),
            name: "Pricing".to_string(),
            content: json!({"title": "Plans", "tiers": ["Free", "Pro"]}),
            styles: BlockStyles::default(),
            preview: None,
            created_at: Utc::now(),
        };

        let template = record.to_template();
        assert_eq!(template.id.as_str(), "custom-42");
        assert_eq!(template.category, TemplateCategory::Custom);
        assert_eq!(template.block_type(), BlockType::Custom("custom-42".into()));
        assert_eq!(template.content.text("title").as_deref(), Some("Plans"));
    }
}
