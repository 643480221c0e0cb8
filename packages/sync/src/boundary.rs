//! # Sync Boundary
//!
//! Moves a [`BlockDocument`] to and from website records. The in-memory
//! document stays the source of truth: every operation takes the document by
//! reference and returns an updated copy, so a failed call leaves the
//! caller's state as it was.
//!
//! ## Flush cadence
//!
//! The document is written on explicit save, on publish, and right after a
//! block built from a custom template is added. Nothing is written in the
//! background.

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use webcraft_editor::BlockDocument;
use webcraft_model::{BlockTemplate, UserId};

use crate::context::UserContext;
use crate::errors::SyncError;
use crate::in_flight::{InFlight, Operation};
use crate::records::WebsiteDraft;
use crate::store::RemoteStore;

pub struct SyncBoundary {
    store: Arc<dyn RemoteStore>,
    in_flight: InFlight,
}

impl SyncBoundary {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self::with_in_flight(store, InFlight::new())
    }

    /// Share pending-operation tracking with other components
    pub fn with_in_flight(store: Arc<dyn RemoteStore>, in_flight: InFlight) -> Self {
        Self { store, in_flight }
    }

    pub fn in_flight(&self) -> &InFlight {
        &self.in_flight
    }

    pub fn store(&self) -> &Arc<dyn RemoteStore> {
        &self.store
    }

    /// Most recently updated website of the user, or `None` if they have
    /// none yet.
    #[instrument(skip_all, fields(user = ?ctx.user))]
    pub async fn load(&self, ctx: &UserContext) -> Result<Option<BlockDocument>, SyncError> {
        let user = ctx.require_user()?;
        let _guard = self.in_flight.begin(Operation::Load)?;

        match self.store.latest_website(user).await {
            Ok(record) => {
                info!(website = %record.id, blocks = record.blocks.len(), "loaded website");
                Ok(Some(record.into_document()))
            }
            Err(e) if e.is_not_found() => {
                info!("no website yet");
                Ok(None)
            }
            Err(e) => Err(SyncError::Load(e)),
        }
    }

    /// Persist the document. Creates the record on first save and adopts
    /// its id; later saves update it.
    #[instrument(skip_all, fields(user = ?ctx.user, website = ?doc.meta.remote_id))]
    pub async fn save(
        &self,
        ctx: &UserContext,
        doc: &BlockDocument,
    ) -> Result<BlockDocument, SyncError> {
        let user = ctx.require_user()?;
        let _guard = self.in_flight.begin(Operation::Save)?;

        let saved = self.write(user, doc.clone()).await?;
        info!(website = ?saved.meta.remote_id, "website saved");
        Ok(saved)
    }

    /// Save and mark published. The public slug is assigned on first
    /// publish and never changes afterwards.
    #[instrument(skip_all, fields(user = ?ctx.user, website = ?doc.meta.remote_id))]
    pub async fn publish(
        &self,
        ctx: &UserContext,
        doc: &BlockDocument,
    ) -> Result<BlockDocument, SyncError> {
        let user = ctx.require_user()?;
        let _guard = self.in_flight.begin(Operation::Publish)?;

        let mut doc = doc.clone();
        doc.meta.published = true;
        if doc.meta.publish_url.is_none() {
            doc.meta.publish_url = Some(publish_slug(&doc.meta.name));
        }

        let published = self.write(user, doc).await?;
        info!(slug = ?published.meta.publish_url, "website published");
        Ok(published)
    }

    /// The user's custom blocks as library templates
    #[instrument(skip_all, fields(user = ?ctx.user))]
    pub async fn custom_templates(
        &self,
        ctx: &UserContext,
    ) -> Result<Vec<BlockTemplate>, SyncError> {
        let user = ctx.require_user()?;
        let records = self.store.list_custom_blocks(user).await?;
        Ok(records.iter().map(|r| r.to_template()).collect())
    }

    async fn write(&self, user: &UserId, mut doc: BlockDocument) -> Result<BlockDocument, SyncError> {
        let draft = WebsiteDraft::from_document(user, &doc, Utc::now());

        let record = match &doc.meta.remote_id {
            Some(id) => match self.store.update_website(id, draft.clone()).await {
                Err(e) if e.is_not_found() => {
                    warn!(website = %id, "website record is gone, creating a new one");
                    self.store.create_website(draft).await?
                }
                other => other?,
            },
            None => self.store.create_website(draft).await?,
        };

        doc.meta = record.meta();
        doc.mark_saved();
        Ok(doc)
    }
}

/// `slugified-name-1a2b3c4d`
pub fn publish_slug(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let base = slug.trim_end_matches('-');
    let base = if base.is_empty() { "site" } else { base };

    let suffix = Uuid::new_v4().simple().to_string();
    format!("{}-{}", base, &suffix[..8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_slug_shape() {
        let slug = publish_slug("My  Portfolio!");
        assert!(slug.starts_with("my-portfolio-"), "{slug}");
        assert_eq!(slug.len(), "my-portfolio-".len() + 8);

        assert!(publish_slug("???").starts_with("site-"));
    }
}
