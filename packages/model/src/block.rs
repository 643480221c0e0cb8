use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display, EnumString};

use crate::content::BlockContent;
use crate::ids::{BlockId, CUSTOM_TEMPLATE_PREFIX};
use crate::styles::BlockStyles;
use crate::template::BlockTemplate;

/// Block type tag. Selects the renderer and the content layout.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockType {
    HeroModern,
    HeroClassic,
    HeroMinimal,
    ContentText,
    ContentColumns,
    GalleryGrid,
    GalleryMasonry,
    ContactForm,
    ContactInfo,
    FooterSimple,
    FooterDetailed,
    /// Block instantiated from a custom (AI-generated) template
    Custom(String),
    /// Any other tag. Kept verbatim and rendered as a placeholder.
    Unknown(String),
}

/// Renderer family a block type belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum BlockFamily {
    Hero,
    Content,
    Gallery,
    Contact,
    Footer,
    Custom,
    Unknown,
}

/// Content layout a block type decodes into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Hero,
    Text,
    Columns,
    Gallery,
    ContactForm,
    ContactInfo,
    Footer,
    Freeform,
}

impl BlockType {
    pub fn as_str(&self) -> &str {
        match self {
            BlockType::HeroModern => "hero-modern",
            BlockType::HeroClassic => "hero-classic",
            BlockType::HeroMinimal => "hero-minimal",
            BlockType::ContentText => "content-text",
            BlockType::ContentColumns => "content-columns",
            BlockType::GalleryGrid => "gallery-grid",
            BlockType::GalleryMasonry => "gallery-masonry",
            BlockType::ContactForm => "contact-form",
            BlockType::ContactInfo => "contact-info",
            BlockType::FooterSimple => "footer-simple",
            BlockType::FooterDetailed => "footer-detailed",
            BlockType::Custom(tag) | BlockType::Unknown(tag) => tag,
        }
    }

    pub fn family(&self) -> BlockFamily {
        match self {
            BlockType::HeroModern | BlockType::HeroClassic | BlockType::HeroMinimal => {
                BlockFamily::Hero
            }
            BlockType::ContentText | BlockType::ContentColumns => BlockFamily::Content,
            BlockType::GalleryGrid | BlockType::GalleryMasonry => BlockFamily::Gallery,
            BlockType::ContactForm | BlockType::ContactInfo => BlockFamily::Contact,
            BlockType::FooterSimple | BlockType::FooterDetailed => BlockFamily::Footer,
            BlockType::Custom(_) => BlockFamily::Custom,
            BlockType::Unknown(_) => BlockFamily::Unknown,
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            BlockType::HeroModern | BlockType::HeroClassic | BlockType::HeroMinimal => {
                Layout::Hero
            }
            BlockType::ContentText => Layout::Text,
            BlockType::ContentColumns => Layout::Columns,
            BlockType::GalleryGrid | BlockType::GalleryMasonry => Layout::Gallery,
            BlockType::ContactForm => Layout::ContactForm,
            BlockType::ContactInfo => Layout::ContactInfo,
            BlockType::FooterSimple | BlockType::FooterDetailed => Layout::Footer,
            BlockType::Custom(_) | BlockType::Unknown(_) => Layout::Freeform,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, BlockType::Unknown(_))
    }
}

impl From<&str> for BlockType {
    fn from(tag: &str) -> Self {
        match tag {
            "hero-modern" => BlockType::HeroModern,
            "hero-classic" => BlockType::HeroClassic,
            "hero-minimal" => BlockType::HeroMinimal,
            "content-text" => BlockType::ContentText,
            "content-columns" => BlockType::ContentColumns,
            "gallery-grid" => BlockType::GalleryGrid,
            "gallery-masonry" => BlockType::GalleryMasonry,
            "contact-form" => BlockType::ContactForm,
            "contact-info" => BlockType::ContactInfo,
            "footer-simple" => BlockType::FooterSimple,
            "footer-detailed" => BlockType::FooterDetailed,
            other if other.starts_with(CUSTOM_TEMPLATE_PREFIX) => {
                BlockType::Custom(other.to_string())
            }
            other => BlockType::Unknown(other.to_string()),
        }
    }
}

impl From<String> for BlockType {
    fn from(tag: String) -> Self {
        BlockType::from(tag.as_str())
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BlockType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BlockType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(BlockType::from(tag))
    }
}

/// One placed content unit on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawBlock", into = "RawBlock")]
pub struct Block {
    pub id: BlockId,
    pub block_type: BlockType,
    pub content: BlockContent,
    pub styles: BlockStyles,
    /// Zero-based rank among the document's blocks
    pub position: usize,
}

impl Block {
    /// Instantiate a template with a fresh id
    pub fn from_template(template: &BlockTemplate, position: usize) -> Self {
        Self {
            id: BlockId::generate(),
            block_type: template.block_type(),
            content: template.content.clone(),
            styles: template.styles.clone(),
            position,
        }
    }
}

/// Persisted block shape: content is decoded against the sibling `type`
/// field, which a derived tagged enum cannot express.
#[derive(Serialize, Deserialize)]
struct RawBlock {
    id: BlockId,
    #[serde(rename = "type")]
    block_type: BlockType,
    #[serde(default)]
    content: Value,
    #[serde(default)]
    styles: BlockStyles,
    #[serde(default)]
    position: usize,
}

impl From<RawBlock> for Block {
    fn from(raw: RawBlock) -> Self {
        let content = BlockContent::decode(&raw.block_type, raw.content);
        Self {
            id: raw.id,
            block_type: raw.block_type,
            content,
            styles: raw.styles,
            position: raw.position,
        }
    }
}

impl From<Block> for RawBlock {
    fn from(block: Block) -> Self {
        Self {
            content: block.content.to_value(),
            id: block.id,
            block_type: block.block_type,
            styles: block.styles,
            position: block.position,
        }
    }
}
