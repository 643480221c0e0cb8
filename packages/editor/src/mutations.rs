//! # Block Mutations
//!
//! High-level operations on a block document.
//!
//! ## Mutation Semantics
//!
//! ### AddBlock
//! - Appends at `position = len`
//! - Blocks built from a custom template must be flushed to the store right
//!   away; the result carries `flush_required`
//!
//! ### UpdateBlock
//! - Shallow merge per top-level field of `content` and `styles`
//! - Unknown block id is a no-op, not an error
//!
//! ### DeleteBlock
//! - Removes exactly one block, renumbers the rest
//! - Unknown block id is a no-op
//!
//! ### MoveBlock
//! - Splice semantics: remove at `from`, insert at `to`
//! - `from == to` is a no-op; indices must be inside the list

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use webcraft_model::{Block, BlockId, BlockStyles, BlockType};

use crate::document::BlockDocument;

/// Partial update of one block
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockUpdate {
    /// Content fields to overwrite, by wire name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<Map<String, Value>>,

    /// Style properties to overwrite
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub styles: Option<BlockStyles>,
}

impl BlockUpdate {
    /// Update a single content field
    pub fn content_field(field: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut content = Map::new();
        content.insert(field.into(), value.into());
        Self {
            content: Some(content),
            styles: None,
        }
    }

    pub fn styles(styles: BlockStyles) -> Self {
        Self {
            content: None,
            styles: Some(styles),
        }
    }
}

/// Semantic mutations on a block document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Mutation {
    /// Append an instantiated block
    #[serde(rename_all = "camelCase")]
    AddBlock { block: Block },

    /// Merge content and/or styles into a block
    #[serde(rename_all = "camelCase")]
    UpdateBlock { block_id: BlockId, update: BlockUpdate },

    /// Remove a block
    #[serde(rename_all = "camelCase")]
    DeleteBlock { block_id: BlockId },

    /// Move the block at `from` to index `to`
    MoveBlock { from: usize, to: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MutationError {
    #[error("Index {index} out of range for {len} blocks")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Block already exists: {0}")]
    DuplicateBlock(BlockId),

    #[error("Invalid content for {block_type}: {message}")]
    InvalidContent {
        block_type: BlockType,
        message: String,
    },
}

impl Mutation {
    /// Apply mutation to the document with validation. Returns whether the
    /// document changed.
    pub fn apply(&self, doc: &mut BlockDocument) -> Result<bool, MutationError> {
        self.validate(doc)?;

        match self {
            Mutation::AddBlock { block } => {
                doc.push_block(block.clone());
                Ok(true)
            }
            Mutation::UpdateBlock { block_id, update } => doc.update_block(block_id, update),
            Mutation::DeleteBlock { block_id } => Ok(doc.delete_block(block_id).is_some()),
            Mutation::MoveBlock { from, to } => doc.move_block(*from, *to),
        }
    }

    /// Validate without applying
    pub fn validate(&self, doc: &BlockDocument) -> Result<(), MutationError> {
        match self {
            Mutation::AddBlock { block } => {
                if doc.get(&block.id).is_some() {
                    return Err(MutationError::DuplicateBlock(block.id.clone()));
                }
                Ok(())
            }
            Mutation::UpdateBlock { .. } | Mutation::DeleteBlock { .. } => Ok(()),
            Mutation::MoveBlock { from, to } => {
                let len = doc.len();
                for index in [*from, *to] {
                    if index >= len {
                        return Err(MutationError::IndexOutOfRange { index, len });
                    }
                }
                Ok(())
            }
        }
    }

    /// Whether this mutation must be flushed to the store immediately
    pub fn requires_flush(&self) -> bool {
        matches!(
            self,
            Mutation::AddBlock { block } if matches!(block.block_type, BlockType::Custom(_))
        )
    }

    /// Get a debug name for this mutation
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::AddBlock { .. } => "AddBlock",
            Mutation::UpdateBlock { .. } => "UpdateBlock",
            Mutation::DeleteBlock { .. } => "DeleteBlock",
            Mutation::MoveBlock { .. } => "MoveBlock",
        }
    }
}

/// Result of applying a mutation
#[derive(Debug, Clone, PartialEq)]
pub struct MutationResult {
    /// Document version after the mutation
    pub version: u64,

    /// False for defensive no-ops (unknown id, move onto itself)
    pub changed: bool,

    /// The caller must save the document now
    pub flush_required: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mutation_serialization() {
        let mutation = Mutation::UpdateBlock {
            block_id: BlockId::from("block-1"),
            update: BlockUpdate::content_field("title", "Hello"),
        };

        let json = serde_json::to_value(&mutation).unwrap();
        assert_eq!(
            json,
            json!({
                "type": "updateBlock",
                "blockId": "block-1",
                "update": {"content": {"title": "Hello"}}
            })
        );

        let back: Mutation = serde_json::from_value(json).unwrap();
        assert_eq!(back, mutation);
    }

    #[test]
    fn test_move_validation_rejects_out_of_range() {
        let doc = BlockDocument::new("Site");
        let mutation = Mutation::MoveBlock { from: 0, to: 1 };

        assert_eq!(
            mutation.validate(&doc),
            Err(MutationError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn test_only_custom_blocks_require_flush() {
        let template = webcraft_model::builtin_template("hero-modern").unwrap();
        let builtin = Mutation::AddBlock {
            block: Block::from_template(template, 0),
        };
        assert!(!builtin.requires_flush());

        let mut block = Block::from_template(template, 0);
        block.block_type = BlockType::from("custom-1");
        assert!(Mutation::AddBlock { block }.requires_flush());
    }
}
