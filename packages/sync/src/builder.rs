use std::sync::Arc;

use tracing::{debug, info};
use webcraft_editor::{AddedBlock, BlockDocument, EditSession};
use webcraft_model::{BlockTemplate, TemplateFilter, TemplateId, TemplateLibrary};

use crate::assistant::{AiEndpoint, AssistantReply, ChatAssistant};
use crate::boundary::SyncBoundary;
use crate::context::UserContext;
use crate::errors::SyncError;
use crate::in_flight::{InFlight, Operation};
use crate::records::ChatMessageRecord;
use crate::store::RemoteStore;

/// Name of a document that has never been saved
pub const DEFAULT_SITE_NAME: &str = "My Website";

/// One user's builder: edit session, template library and the remote
/// side, wired together.
pub struct WebsiteBuilder {
    ctx: UserContext,
    session: EditSession,
    library: TemplateLibrary,
    sync: SyncBoundary,
    assistant: Option<ChatAssistant>,
    in_flight: InFlight,
}

impl WebsiteBuilder {
    /// Builder on an empty, unsaved document
    pub fn new(ctx: UserContext, store: Arc<dyn RemoteStore>) -> Self {
        let in_flight = InFlight::new();
        let mut document = BlockDocument::new(DEFAULT_SITE_NAME);
        document.meta.theme = ctx.theme.clone();

        Self {
            session: EditSession::new("builder", document),
            library: TemplateLibrary::new(),
            sync: SyncBoundary::with_in_flight(store, in_flight.clone()),
            assistant: None,
            in_flight,
            ctx,
        }
    }

    /// Builder on the user's latest website and custom templates
    pub async fn open(ctx: UserContext, store: Arc<dyn RemoteStore>) -> Result<Self, SyncError> {
        let mut builder = Self::new(ctx, store);
        builder.load().await?;
        builder.refresh_custom_templates().await?;
        Ok(builder)
    }

    pub fn with_assistant(mut self, endpoint: Arc<dyn AiEndpoint>) -> Self {
        self.assistant = Some(ChatAssistant::with_in_flight(
            Arc::clone(self.sync.store()),
            endpoint,
            self.in_flight.clone(),
        ));
        self
    }

    pub fn context(&self) -> &UserContext {
        &self.ctx
    }

    pub fn session(&self) -> &EditSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditSession {
        &mut self.session
    }

    pub fn document(&self) -> &BlockDocument {
        &self.session.document
    }

    pub fn library(&self) -> &TemplateLibrary {
        &self.library
    }

    pub fn templates<'a>(
        &'a self,
        filter: &'a TemplateFilter,
    ) -> impl Iterator<Item = &'a BlockTemplate> + 'a {
        self.library.filter(filter)
    }

    /// Handle for polling pending operations
    pub fn in_flight(&self) -> InFlight {
        self.in_flight.clone()
    }

    pub fn is_pending(&self, op: Operation) -> bool {
        self.in_flight.is_pending(op)
    }

    /// Replace the document with the user's latest website. Returns false
    /// (and keeps the current document) if they have none.
    pub async fn load(&mut self) -> Result<bool, SyncError> {
        match self.sync.load(&self.ctx).await? {
            Some(document) => {
                self.session.replace_document(document);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Add a block from the library. Blocks built from a custom template are
    /// saved right away.
    pub async fn add_block(&mut self, template_id: &TemplateId) -> Result<AddedBlock, SyncError> {
        let template = self
            .library
            .get(template_id)
            .cloned()
            .ok_or_else(|| SyncError::UnknownTemplate(template_id.clone()))?;

        let added = self.session.add_block(&template)?;
        if added.result.flush_required {
            debug!(block = %added.block.id, "flushing custom block");
            self.save().await?;
        }
        Ok(added)
    }

    pub async fn save(&mut self) -> Result<(), SyncError> {
        let saved = self.sync.save(&self.ctx, &self.session.document).await?;
        self.adopt(saved);
        Ok(())
    }

    /// Publish and return the public slug
    pub async fn publish(&mut self) -> Result<String, SyncError> {
        let published = self.sync.publish(&self.ctx, &self.session.document).await?;
        self.adopt(published);
        Ok(self.session.document.meta.publish_url.clone().unwrap_or_default())
    }

    /// Refetch the user's custom templates. Returns how many there are.
    pub async fn refresh_custom_templates(&mut self) -> Result<usize, SyncError> {
        let templates = self.sync.custom_templates(&self.ctx).await?;
        let count = templates.len();
        self.library.set_custom(templates);
        debug!(count, "custom templates refreshed");
        Ok(count)
    }

    /// Send a prompt to the assistant. A block it creates shows up in the
    /// library once this returns.
    pub async fn send_prompt(&mut self, prompt: &str) -> Result<AssistantReply, SyncError> {
        let assistant = self
            .assistant
            .as_ref()
            .ok_or(SyncError::AssistantUnavailable)?;
        let reply = assistant.send(&self.ctx, prompt).await?;

        if let Some(template) = &reply.created_template {
            info!(template = %template, "new custom template");
            self.refresh_custom_templates().await?;
        }
        Ok(reply)
    }

    pub async fn chat_history(&self) -> Result<Vec<ChatMessageRecord>, SyncError> {
        let assistant = self
            .assistant
            .as_ref()
            .ok_or(SyncError::AssistantUnavailable)?;
        assistant.history(&self.ctx).await
    }

    /// Take over the remote metadata of a saved copy. Blocks are untouched:
    /// the saved copy was made from this document.
    fn adopt(&mut self, saved: BlockDocument) {
        self.session.document.meta = saved.meta;
        self.session.document.mark_saved();
    }
}
