use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::block::BlockType;
use crate::content::BlockContent;
use crate::ids::TemplateId;
use crate::styles::BlockStyles;

/// Sidebar category of a template
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum TemplateCategory {
    Hero,
    Content,
    Gallery,
    Contact,
    Footer,
    /// Templates created by the AI assistant
    Custom,
}

/// Immutable factory definition for a block
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockTemplate {
    pub id: TemplateId,
    pub name: String,
    pub icon: String,
    pub category: TemplateCategory,
    /// Short description shown under the name
    pub preview: String,
    pub content: BlockContent,
    pub styles: BlockStyles,
}

impl BlockTemplate {
    /// Type tag of blocks created from this template
    pub fn block_type(&self) -> BlockType {
        BlockType::from(self.id.as_str())
    }

    pub fn is_custom(&self) -> bool {
        self.id.is_custom()
    }
}
