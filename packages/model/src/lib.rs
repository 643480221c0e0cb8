//! # WebCraft Model
//!
//! Plain data types shared by every WebCraft crate: blocks, their
//! type-dependent content, per-block styles, and the template catalog used
//! to instantiate new blocks.

pub mod block;
pub mod catalog;
pub mod content;
pub mod ids;
pub mod library;
pub mod styles;
pub mod template;

pub use block::{Block, BlockFamily, BlockType, Layout};
pub use catalog::{builtin_template, builtin_templates};
pub use content::{
    BlockContent, ColumnsContent, ContactFormContent, ContactInfoContent, ContentError,
    FooterContent, GalleryContent, HeroContent, Link, TextContent,
};
pub use ids::{BlockId, CustomBlockId, MessageId, TemplateId, UserId, WebsiteId};
pub use library::{CategoryFilter, TemplateFilter, TemplateLibrary};
pub use styles::{BlockStyles, TextAlign};
pub use template::{BlockTemplate, TemplateCategory};
