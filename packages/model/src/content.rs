//! # Block Content
//!
//! Content is a tagged union keyed by the block's type. Each layout has its
//! own payload struct; anything the builder does not recognize (custom
//! blocks from the assistant, types from a newer client) is kept verbatim in
//! [`BlockContent::Unknown`] so it survives a load/save cycle untouched.
//!
//! Missing fields default to empty values, so partially filled content (for
//! example from the AI assistant) still decodes into a typed layout. Keys a
//! layout does not name are carried along in its `extra` map.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::block::{BlockType, Layout};

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content for {block_type} must be an object")]
    NotAnObject { block_type: String },

    #[error("Content does not fit the {block_type} layout: {source}")]
    Shape {
        block_type: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub subtitle: String,
    pub button_text: String,
    pub button_link: String,
    /// Fields outside the layout, kept as stored
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TextContent {
    pub title: String,
    pub text: String,
    /// Fields outside the layout, kept as stored
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnsContent {
    pub left_title: String,
    pub left_text: String,
    pub right_title: String,
    pub right_text: String,
    /// Fields outside the layout, kept as stored
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryContent {
    pub title: String,
    pub images: Vec<String>,
    /// Fields outside the layout, kept as stored
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactFormContent {
    pub title: String,
    pub subtitle: String,
    pub fields: Vec<String>,
    /// Fields outside the layout, kept as stored
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactInfoContent {
    pub title: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    /// Fields outside the layout, kept as stored
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A `{text, url}` pair, as used by footers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FooterContent {
    pub text: String,
    pub links: Vec<Link>,
    /// Fields outside the layout, kept as stored
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Type-dependent block content
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum BlockContent {
    Hero(HeroContent),
    Text(TextContent),
    Columns(ColumnsContent),
    Gallery(GalleryContent),
    ContactForm(ContactFormContent),
    ContactInfo(ContactInfoContent),
    Footer(FooterContent),
    /// Raw fields of a block type without a typed layout
    Unknown(Map<String, Value>),
}

impl BlockContent {
    /// Decode content for `block_type`, failing if it does not fit the
    /// type's layout.
    pub fn from_value(block_type: &BlockType, value: Value) -> Result<Self, ContentError> {
        let map = match value {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            _ => {
                return Err(ContentError::NotAnObject {
                    block_type: block_type.to_string(),
                })
            }
        };

        let shape = |e: serde_json::Error| ContentError::Shape {
            block_type: block_type.to_string(),
            source: e,
        };
        let value = Value::Object(map);

        Ok(match block_type.layout() {
            Layout::Hero => BlockContent::Hero(serde_json::from_value(value).map_err(shape)?),
            Layout::Text => BlockContent::Text(serde_json::from_value(value).map_err(shape)?),
            Layout::Columns => {
                BlockContent::Columns(serde_json::from_value(value).map_err(shape)?)
            }
            Layout::Gallery => {
                BlockContent::Gallery(serde_json::from_value(value).map_err(shape)?)
            }
            Layout::ContactForm => {
                BlockContent::ContactForm(serde_json::from_value(value).map_err(shape)?)
            }
            Layout::ContactInfo => {
                BlockContent::ContactInfo(serde_json::from_value(value).map_err(shape)?)
            }
            Layout::Footer => BlockContent::Footer(serde_json::from_value(value).map_err(shape)?),
            Layout::Freeform => match value {
                Value::Object(map) => BlockContent::Unknown(map),
                _ => BlockContent::Unknown(Map::new()),
            },
        })
    }

    /// Lenient decode used when reading persisted blocks: content that does
    /// not fit its layout is preserved as [`BlockContent::Unknown`].
    pub fn decode(block_type: &BlockType, value: Value) -> Self {
        match Self::from_value(block_type, value.clone()) {
            Ok(content) => content,
            Err(_) => match value {
                Value::Object(map) => BlockContent::Unknown(map),
                _ => BlockContent::Unknown(Map::new()),
            },
        }
    }

    /// Content as a JSON value (the persisted shape)
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Map::new()))
    }

    /// Shallow merge of named fields into this content. Fields absent from
    /// `patch` are kept. On error the content is left unchanged.
    pub fn merge(
        &mut self,
        block_type: &BlockType,
        patch: &Map<String, Value>,
    ) -> Result<(), ContentError> {
        let mut current = match self.to_value() {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for (key, value) in patch {
            current.insert(key.clone(), value.clone());
        }

        let merged = match self {
            // Unknown content stays unknown even if its type gained a layout
            BlockContent::Unknown(_) => BlockContent::Unknown(current),
            _ => Self::from_value(block_type, Value::Object(current))?,
        };
        *self = merged;
        Ok(())
    }

    /// Look up a top-level string field by its wire name
    pub fn text(&self, field: &str) -> Option<String> {
        match self.to_value().get(field) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_hero_with_missing_fields() {
        let content =
            BlockContent::from_value(&BlockType::HeroModern, json!({"title": "Hi"})).unwrap();

        match content {
            BlockContent::Hero(hero) => {
                assert_eq!(hero.title, "Hi");
                assert_eq!(hero.button_text, "");
            }
            other => panic!("expected hero content, got {:?}", other),
        }
    }

    #[test]
    fn test_shape_mismatch_is_an_error() {
        let result = BlockContent::from_value(
            &BlockType::GalleryGrid,
            json!({"title": "Work", "images": "not-a-list"}),
        );
        assert!(matches!(result, Err(ContentError::Shape { .. })));
    }

    #[test]
    fn test_lenient_decode_preserves_raw_fields() {
        let content = BlockContent::decode(&BlockType::GalleryGrid, json!({"images": 3}));
        assert_eq!(content.to_value(), json!({"images": 3}));
    }

    #[test]
    fn test_merge_named_field_only() {
        let mut content = BlockContent::Footer(FooterContent {
            text: "© 2024".to_string(),
            links: vec![Link {
                text: "Privacy".to_string(),
                url: "#".to_string(),
            }],
            ..Default::default()
        });

        let patch = json!({"text": "© 2025"});
        content
            .merge(&BlockType::FooterSimple, patch.as_object().unwrap())
            .unwrap();

        match &content {
            BlockContent::Footer(footer) => {
                assert_eq!(footer.text, "© 2025");
                assert_eq!(footer.links.len(), 1);
            }
            other => panic!("expected footer content, got {:?}", other),
        }
    }

    #[test]
    fn test_failed_merge_leaves_content_unchanged() {
        let mut content = BlockContent::Text(TextContent {
            title: "About".to_string(),
            text: "Body".to_string(),
            ..Default::default()
        });
        let before = content.clone();

        let patch = json!({"title": ["wrong"]});
        let result = content.merge(&BlockType::ContentText, patch.as_object().unwrap());

        assert!(result.is_err());
        assert_eq!(content, before);
    }

    #[test]
    fn test_unknown_content_round_trips_verbatim() {
        let raw = json!({"tiers": [{"name": "Pro", "price": 19}], "title": "Pricing"});
        let block_type = BlockType::from("custom-7");
        let content = BlockContent::decode(&block_type, raw.clone());

        assert!(matches!(content, BlockContent::Unknown(_)));
        assert_eq!(content.to_value(), raw);
        assert_eq!(content.text("title").as_deref(), Some("Pricing"));
    }

    #[test]
    fn test_extra_fields_survive_decode() {
        let raw = json!({"title": "Hi", "backgroundImage": "x.png"});
        let content = BlockContent::from_value(&BlockType::HeroModern, raw).unwrap();

        match &content {
            BlockContent::Hero(hero) => {
                assert_eq!(hero.title, "Hi");
                assert_eq!(hero.extra.get("backgroundImage"), Some(&json!("x.png")));
            }
            other => panic!("expected hero content, got {:?}", other),
        }
        assert_eq!(content.to_value()["backgroundImage"], "x.png");
        assert_eq!(content.text("backgroundImage").as_deref(), Some("x.png"));
    }

    #[test]
    fn test_merge_keeps_fields_outside_layout() {
        let mut content =
            BlockContent::from_value(&BlockType::HeroMinimal, json!({"title": "Hi"})).unwrap();

        let patch = json!({"tagline": "New"});
        content
            .merge(&BlockType::HeroMinimal, patch.as_object().unwrap())
            .unwrap();

        assert!(matches!(content, BlockContent::Hero(_)));
        assert_eq!(content.text("tagline").as_deref(), Some("New"));
        assert_eq!(content.text("title").as_deref(), Some("Hi"));
    }
}
