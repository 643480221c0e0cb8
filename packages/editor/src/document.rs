//! # Block Document
//!
//! The in-memory page: an ordered list of blocks plus the metadata of the
//! website record it was loaded from.
//!
//! ## Position invariant
//!
//! Blocks are stored in display order and `position` always equals the
//! block's index. Every mutation renumbers before returning, so readers never
//! observe gaps or duplicates. Blocks coming from the store are sorted by
//! their stored position (stable, so ties keep their stored order) and
//! renumbered on construction.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use webcraft_model::{Block, BlockId, BlockTemplate, WebsiteId};

use crate::drag::Reorder;
use crate::mutations::{BlockUpdate, Mutation, MutationError, MutationResult};

/// Site-wide theme selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSettings {
    pub theme: String,
}

impl Default for ThemeSettings {
    fn default() -> Self {
        Self {
            theme: "light".to_string(),
        }
    }
}

/// Metadata of the persisted website record
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentMeta {
    /// Remote record id, set once the document has been saved
    pub remote_id: Option<WebsiteId>,
    pub name: String,
    pub published: bool,
    /// Public URL slug, assigned on first publish
    pub publish_url: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
    pub theme: ThemeSettings,
}

/// Editable page
#[derive(Debug, Clone, PartialEq)]
pub struct BlockDocument {
    /// Current version number (increments on each effective mutation)
    pub version: u64,

    pub meta: DocumentMeta,

    blocks: Vec<Block>,

    dirty: bool,
}

impl BlockDocument {
    /// Empty, never-saved document
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            version: 0,
            meta: DocumentMeta {
                name: name.into(),
                ..Default::default()
            },
            blocks: Vec::new(),
            dirty: false,
        }
    }

    /// Rebuild a document from persisted parts
    pub fn from_parts(meta: DocumentMeta, mut blocks: Vec<Block>) -> Self {
        blocks.sort_by_key(|b| b.position);
        let mut doc = Self {
            version: 0,
            meta,
            blocks,
            dirty: false,
        };
        doc.renumber();
        doc
    }

    /// Blocks in display order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|b| &b.id == id)
    }

    pub fn index_of(&self, id: &BlockId) -> Option<usize> {
        self.blocks.iter().position(|b| &b.id == id)
    }

    /// Whether the document changed since it was loaded or last saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Record a successful save
    pub fn mark_saved(&mut self) {
        self.dirty = false;
    }

    /// Instantiate `template` and append it
    pub fn add_block(&mut self, template: &BlockTemplate) -> Block {
        let block = Block::from_template(template, self.blocks.len());
        self.push_block(block.clone());
        self.touch();
        block
    }

    /// Apply a mutation
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, MutationError> {
        let changed = mutation.apply(self)?;
        if changed {
            self.touch();
        }

        debug!(
            mutation = mutation.name(),
            changed,
            version = self.version,
            "applied mutation"
        );

        Ok(MutationResult {
            version: self.version,
            changed,
            flush_required: changed && mutation.requires_flush(),
        })
    }

    pub(crate) fn push_block(&mut self, mut block: Block) {
        block.position = self.blocks.len();
        self.blocks.push(block);
    }

    /// Merge `update` into the block with `id`. Returns `Ok(false)` when no
    /// block matches; the block is left untouched if the content patch does
    /// not fit its layout.
    pub fn update_block(
        &mut self,
        id: &BlockId,
        update: &BlockUpdate,
    ) -> Result<bool, MutationError> {
        let Some(block) = self.blocks.iter_mut().find(|b| &b.id == id) else {
            return Ok(false);
        };

        if let Some(patch) = &update.content {
            block
                .content
                .merge(&block.block_type, patch)
                .map_err(|e| MutationError::InvalidContent {
                    block_type: block.block_type.clone(),
                    message: e.to_string(),
                })?;
        }
        if let Some(styles) = &update.styles {
            block.styles.merge(styles);
        }

        Ok(true)
    }

    /// Remove the block with `id` and renumber the rest
    pub fn delete_block(&mut self, id: &BlockId) -> Option<Block> {
        let index = self.index_of(id)?;
        let removed = self.blocks.remove(index);
        self.renumber();
        Some(removed)
    }

    /// Move the block at `from` to index `to`
    pub fn move_block(&mut self, from: usize, to: usize) -> Result<bool, MutationError> {
        let len = self.blocks.len();
        for index in [from, to] {
            if index >= len {
                return Err(MutationError::IndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(false);
        }

        let block = self.blocks.remove(from);
        self.blocks.insert(to, block);
        self.renumber();
        Ok(true)
    }

    fn renumber(&mut self) {
        for (index, block) in self.blocks.iter_mut().enumerate() {
            block.position = index;
        }
    }

    fn touch(&mut self) {
        self.version += 1;
        self.dirty = true;
    }
}

impl Reorder for BlockDocument {
    type Error = MutationError;

    fn move_block(&mut self, from: usize, to: usize) -> Result<(), MutationError> {
        self.apply(Mutation::MoveBlock { from, to }).map(|_| ())
    }
}

impl Default for BlockDocument {
    fn default() -> Self {
        Self::new("My Website")
    }
}
