//! # Edit Session
//!
//! One user's editing state around a document: the current selection, the
//! style panel, and the in-progress drag gesture. Every document change goes
//! through [`EditSession::apply`], which keeps that ephemeral state
//! consistent with the block list (selection cleared when its block goes
//! away, drag gesture cancelled when indices shift under it).

use tracing::debug;
use webcraft_model::{Block, BlockId, BlockTemplate};

use crate::drag::{BlockMove, DragIndicator, DragReorder, DragState};
use crate::mutations::{BlockUpdate, Mutation, MutationResult};
use crate::{BlockDocument, EditorError};

/// Single edit session
pub struct EditSession {
    /// Unique session identifier
    pub id: String,

    /// Document being edited
    pub document: BlockDocument,

    selected: Option<BlockId>,

    style_panel_open: bool,

    drag: DragReorder,
}

/// Outcome of adding a block
#[derive(Debug, Clone)]
pub struct AddedBlock {
    pub block: Block,
    pub result: MutationResult,
}

impl EditSession {
    /// Create new edit session
    pub fn new(id: impl Into<String>, document: BlockDocument) -> Self {
        Self::with_drag(id, document, DragReorder::new())
    }

    /// Create a session with a configured drag machine
    pub fn with_drag(id: impl Into<String>, document: BlockDocument, drag: DragReorder) -> Self {
        Self {
            id: id.into(),
            document,
            selected: None,
            style_panel_open: false,
            drag,
        }
    }

    /// Replace the document (e.g. after loading from the store). Ephemeral
    /// state does not carry over.
    pub fn replace_document(&mut self, document: BlockDocument) {
        self.document = document;
        self.selected = None;
        self.style_panel_open = false;
        self.drag.cancel();
    }

    /// Apply a mutation and reconcile selection and drag state
    pub fn apply(&mut self, mutation: Mutation) -> Result<MutationResult, EditorError> {
        let shifts_indices = !matches!(mutation, Mutation::UpdateBlock { .. });
        let result = self.document.apply(mutation)?;

        if let Some(selected) = &self.selected {
            if self.document.get(selected).is_none() {
                debug!(block = %selected, "selected block deleted, clearing selection");
                self.clear_selection();
            }
        }
        if shifts_indices && result.changed && self.drag.is_dragging() {
            debug!("block order changed mid-gesture, cancelling drag");
            self.drag.cancel();
        }

        Ok(result)
    }

    /// Instantiate `template` and append it
    pub fn add_block(&mut self, template: &BlockTemplate) -> Result<AddedBlock, EditorError> {
        let block = Block::from_template(template, self.document.len());
        let result = self.apply(Mutation::AddBlock {
            block: block.clone(),
        })?;
        let block = self
            .document
            .get(&block.id)
            .cloned()
            .unwrap_or(block);
        Ok(AddedBlock { block, result })
    }

    pub fn update_block(
        &mut self,
        block_id: &BlockId,
        update: BlockUpdate,
    ) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::UpdateBlock {
            block_id: block_id.clone(),
            update,
        })
    }

    pub fn delete_block(&mut self, block_id: &BlockId) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::DeleteBlock {
            block_id: block_id.clone(),
        })
    }

    pub fn move_block(&mut self, from: usize, to: usize) -> Result<MutationResult, EditorError> {
        self.apply(Mutation::MoveBlock { from, to })
    }

    /// Move a block one step towards the top. No-op for the first block or
    /// an unknown id.
    pub fn move_up(&mut self, block_id: &BlockId) -> Result<Option<BlockMove>, EditorError> {
        match self.document.index_of(block_id) {
            Some(index) if index > 0 => {
                self.move_block(index, index - 1)?;
                Ok(Some(BlockMove {
                    from: index,
                    to: index - 1,
                }))
            }
            _ => Ok(None),
        }
    }

    /// Move a block one step towards the bottom
    pub fn move_down(&mut self, block_id: &BlockId) -> Result<Option<BlockMove>, EditorError> {
        let last = self.document.len().saturating_sub(1);
        match self.document.index_of(block_id) {
            Some(index) if index < last => {
                self.move_block(index, index + 1)?;
                Ok(Some(BlockMove {
                    from: index,
                    to: index + 1,
                }))
            }
            _ => Ok(None),
        }
    }

    // ── Selection ───────────────────────────────────────────────────────────

    /// Select a block. Selecting an id that is not in the document clears
    /// the selection.
    pub fn select(&mut self, block_id: &BlockId) {
        if self.document.get(block_id).is_some() {
            self.selected = Some(block_id.clone());
        } else {
            self.clear_selection();
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.style_panel_open = false;
    }

    pub fn selected_id(&self) -> Option<&BlockId> {
        self.selected.as_ref()
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selected.as_ref().and_then(|id| self.document.get(id))
    }

    /// Open the style panel for the selected block. Returns false when
    /// nothing is selected.
    pub fn open_style_panel(&mut self) -> bool {
        self.style_panel_open = self.selected.is_some();
        self.style_panel_open
    }

    pub fn close_style_panel(&mut self) {
        self.style_panel_open = false;
    }

    pub fn is_style_panel_open(&self) -> bool {
        self.style_panel_open && self.selected.is_some()
    }

    // ── Drag and drop ───────────────────────────────────────────────────────

    pub fn drag_start(&mut self, index: usize) -> Result<(), EditorError> {
        let len = self.document.len();
        if index >= len {
            return Err(EditorError::InvalidDragIndex { index, len });
        }
        self.drag.drag_start(index);
        Ok(())
    }

    /// Returns whether the visual state changed. Positions outside the list
    /// are ignored.
    pub fn drag_over(&mut self, index: usize) -> bool {
        if index >= self.document.len() {
            return false;
        }
        self.drag.drag_over(index)
    }

    pub fn drop(&mut self) -> Result<Option<BlockMove>, EditorError> {
        Ok(self.drag.drop(&mut self.document)?)
    }

    pub fn drag_end(&mut self) -> Result<Option<BlockMove>, EditorError> {
        Ok(self.drag.drag_end(&mut self.document)?)
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn drag_indicator(&self, index: usize) -> DragIndicator {
        self.drag.indicator(index)
    }
}
