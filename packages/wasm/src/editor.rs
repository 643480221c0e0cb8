//! Editor state behind the JS bindings. Everything crosses the boundary as
//! JSON strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use webcraft_compiler_html::{compile_to_html, CompileError, CompileOptions};
use webcraft_editor::{
    BlockDocument, BlockUpdate, DocumentMeta, DragEndPolicy, DragReorder, EditSession,
    EditorError, Mutation,
};
use webcraft_model::{
    builtin_templates, Block, BlockId, CategoryFilter, TemplateFilter, TemplateId, TemplateLibrary,
};

#[derive(Error, Debug)]
pub enum BindingError {
    #[error(transparent)]
    Editor(#[from] EditorError),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// Wire shape of a document handed over by the host page
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DocumentJson {
    #[serde(default)]
    pub meta: DocumentMeta,
    #[serde(default)]
    pub blocks: Vec<Block>,
}

pub struct Editor {
    session: EditSession,
    library: TemplateLibrary,
}

impl Editor {
    pub fn new(name: &str) -> Self {
        Self::from_document(BlockDocument::new(name))
    }

    pub fn from_document(document: BlockDocument) -> Self {
        Self {
            session: EditSession::new("wasm", document),
            library: TemplateLibrary::new(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, BindingError> {
        let doc: DocumentJson = serde_json::from_str(json)?;
        Ok(Self::from_document(BlockDocument::from_parts(doc.meta, doc.blocks)))
    }

    pub fn to_json(&self) -> Result<String, BindingError> {
        let doc = &self.session.document;
        Ok(serde_json::to_string(&DocumentJson {
            meta: doc.meta.clone(),
            blocks: doc.blocks().to_vec(),
        })?)
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditSession {
        &mut self.session
    }

    /// Swaps the drag machine. Selection and any gesture in progress are reset.
    pub fn set_drag_end_policy(&mut self, commit: bool) {
        let policy = if commit {
            DragEndPolicy::Commit
        } else {
            DragEndPolicy::Cancel
        };
        let document = std::mem::take(&mut self.session.document);
        self.session = EditSession::with_drag("wasm", document, DragReorder::with_policy(policy));
    }

    pub fn blocks_json(&self) -> Result<String, BindingError> {
        Ok(serde_json::to_string(self.session.document.blocks())?)
    }

    /// Instantiate a template; returns the new block as JSON
    pub fn add_block(&mut self, template_id: &str) -> Result<String, BindingError> {
        let template = self
            .library
            .get(&TemplateId::from(template_id))
            .cloned()
            .ok_or_else(|| BindingError::UnknownTemplate(template_id.to_string()))?;
        let added = self.session.add_block(&template)?;
        Ok(serde_json::to_string(&added.block)?)
    }

    /// Apply a mutation given as JSON. Returns whether the document changed.
    pub fn apply_json(&mut self, mutation: &str) -> Result<bool, BindingError> {
        let mutation: Mutation = serde_json::from_str(mutation)?;
        Ok(self.session.apply(mutation)?.changed)
    }

    pub fn update_block(&mut self, id: &str, update: &str) -> Result<bool, BindingError> {
        let update: BlockUpdate = serde_json::from_str(update)?;
        Ok(self
            .session
            .update_block(&BlockId::from(id), update)?
            .changed)
    }

    pub fn drop_json(&mut self) -> Result<String, BindingError> {
        let moved = self.session.drop()?;
        Ok(serde_json::to_string(&moved)?)
    }

    pub fn drag_end_json(&mut self) -> Result<String, BindingError> {
        let moved = self.session.drag_end()?;
        Ok(serde_json::to_string(&moved)?)
    }

    pub fn drag_state_json(&self) -> Result<String, BindingError> {
        Ok(serde_json::to_string(&self.session.drag_state())?)
    }

    pub fn drag_indicator_json(&self, index: usize) -> Result<String, BindingError> {
        Ok(serde_json::to_string(&self.session.drag_indicator(index))?)
    }

    pub fn render_html(&self) -> Result<String, BindingError> {
        Ok(compile_to_html(
            &self.session.document,
            CompileOptions::default(),
        )?)
    }
}

/// Built-in templates matching the sidebar filter, as JSON
pub fn list_templates(category: &str, search: &str) -> Result<String, BindingError> {
    let category: CategoryFilter = category
        .parse()
        .map_err(|_| BindingError::UnknownCategory(category.to_string()))?;
    let filter = TemplateFilter {
        category,
        search: search.to_string(),
    };
    let templates: Vec<_> = builtin_templates()
        .iter()
        .filter(|t| filter.matches(t))
        .collect();
    Ok(serde_json::to_string(&templates)?)
}
