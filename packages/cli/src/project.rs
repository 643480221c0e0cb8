//! Local project: config, the file store and the working draft.
//!
//! Each command runs in its own process, so the in-memory document is kept
//! in a draft file between invocations. Editing commands rewrite the draft;
//! only `save` and `publish` (and adding a custom block) reach the store.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;
use webcraft_editor::{BlockDocument, DocumentMeta};
use webcraft_model::{Block, BlockId};
use webcraft_sync::{FileStore, UserContext, WebsiteBuilder};

use crate::config::Config;

#[derive(Debug, Serialize, Deserialize)]
struct DraftFile {
    meta: DocumentMeta,
    blocks: Vec<Block>,
}

pub struct Project {
    pub cwd: PathBuf,
    pub config: Config,
}

impl Project {
    pub fn load(cwd: &Path) -> Result<Self> {
        Ok(Self {
            cwd: cwd.to_path_buf(),
            config: Config::load(cwd)?,
        })
    }

    pub fn context(&self) -> UserContext {
        UserContext::authenticated(self.config.user_id.as_str()).with_theme(&self.config.theme)
    }

    /// Builder on the draft if there is one, otherwise on the latest stored
    /// website.
    pub async fn open(&self) -> Result<WebsiteBuilder> {
        let store = Arc::new(FileStore::new(self.config.store_path(&self.cwd)));
        let mut builder = WebsiteBuilder::open(self.context(), store).await?;

        match self.read_draft()? {
            Some(draft) => builder.session_mut().replace_document(draft),
            None if builder.document().meta.remote_id.is_none() => {
                builder.session_mut().document.meta.name = self.config.site_name.clone();
            }
            None => {}
        }
        Ok(builder)
    }

    fn read_draft(&self) -> Result<Option<BlockDocument>> {
        let path = self.config.draft_path(&self.cwd);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Cannot read draft {}", path.display()))?;
        let draft: DraftFile = serde_json::from_str(&content)
            .with_context(|| format!("Draft {} is damaged", path.display()))?;

        debug!(path = %path.display(), blocks = draft.blocks.len(), "loaded draft");
        Ok(Some(BlockDocument::from_parts(draft.meta, draft.blocks)))
    }

    pub fn write_draft(&self, document: &BlockDocument) -> Result<()> {
        let path = self.config.draft_path(&self.cwd);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let draft = DraftFile {
            meta: document.meta.clone(),
            blocks: document.blocks().to_vec(),
        };
        std::fs::write(&path, serde_json::to_string_pretty(&draft)?)?;
        Ok(())
    }
}

/// Resolve a block argument: a position in the list or a block id
pub fn resolve_block(document: &BlockDocument, reference: &str) -> Result<BlockId> {
    if let Ok(index) = reference.parse::<usize>() {
        return document
            .blocks()
            .get(index)
            .map(|b| b.id.clone())
            .ok_or_else(|| anyhow!("No block at position {} ({} blocks)", index, document.len()));
    }

    let id = BlockId::from(reference);
    if document.get(&id).is_none() {
        return Err(anyhow!("No block with id {}", reference));
    }
    Ok(id)
}
