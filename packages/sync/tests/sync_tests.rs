//! End-to-end tests of the builder against in-memory and file stores

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use webcraft_editor::BlockUpdate;
use webcraft_model::{BlockType, TemplateId, UserId};
use webcraft_sync::{
    AiEndpoint, AssistantError, FileStore, GenerateRequest, GenerateResponse, MemoryStore,
    NewCustomBlock, Notification, Operation, RemoteStore, SyncBoundary, SyncError, UserContext,
    WebsiteBuilder,
};

fn alice() -> UserContext {
    UserContext::authenticated("alice")
}

/// Endpoint that answers every prompt, creating a custom block when the
/// prompt mentions "block".
struct ScriptedEndpoint {
    store: Arc<dyn RemoteStore>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedEndpoint {
    fn new(store: Arc<dyn RemoteStore>) -> Arc<Self> {
        Arc::new(Self {
            store,
            requests: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl AiEndpoint for ScriptedEndpoint {
    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, AssistantError> {
        self.requests.lock().unwrap().push(request.clone());

        if !request.message.contains("block") {
            return Ok(GenerateResponse {
                response: "Happy to help.".to_string(),
                is_generating_block: false,
                block_id: None,
            });
        }

        let record = self
            .store
            .insert_custom_block(NewCustomBlock {
                user_id: UserId::from("alice"),
                name: "Pricing Table".to_string(),
                content: json!({"title": "Plans", "price": "$9"}),
                styles: Default::default(),
                preview: Some("Three tiers".to_string()),
            })
            .await
            .map_err(|e| AssistantError::Endpoint(e.to_string()))?;

        Ok(GenerateResponse {
            response: "I made a pricing block.".to_string(),
            is_generating_block: true,
            block_id: Some(record.id),
        })
    }
}

struct DownEndpoint;

#[async_trait]
impl AiEndpoint for DownEndpoint {
    async fn generate(&self, _: GenerateRequest) -> Result<GenerateResponse, AssistantError> {
        Err(AssistantError::Endpoint("502 Bad Gateway".to_string()))
    }
}

#[tokio::test]
async fn test_load_none_then_save_creates() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let mut builder = WebsiteBuilder::open(alice(), store.clone()).await?;

    assert!(builder.document().is_empty());
    assert!(builder.document().meta.remote_id.is_none());

    builder.add_block(&TemplateId::from("hero-modern")).await?;
    builder.save().await?;

    let id = builder.document().meta.remote_id.clone();
    assert!(id.is_some());
    assert!(builder.document().meta.updated_at.is_some());
    assert!(!builder.document().is_dirty());
    assert_eq!(store.website_count(), 1);

    // second save updates the same record
    let first = builder.document().blocks()[0].id.clone();
    builder
        .session_mut()
        .update_block(&first, BlockUpdate::content_field("title", "Welcome"))?;
    builder.save().await?;
    assert_eq!(builder.document().meta.remote_id, id);
    assert_eq!(store.website_count(), 1);

    let reopened = WebsiteBuilder::open(alice(), store).await?;
    let block = &reopened.document().blocks()[0];
    assert_eq!(block.content.text("title").as_deref(), Some("Welcome"));
    Ok(())
}

#[tokio::test]
async fn test_publish_slug_is_stable() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let mut builder = WebsiteBuilder::new(alice(), store.clone());
    builder.add_block(&TemplateId::from("content-text")).await?;

    // publish without a prior save
    let slug = builder.publish().await?;
    assert!(slug.starts_with("my-website-"));
    assert!(builder.document().meta.published);
    assert!(builder.document().meta.remote_id.is_some());

    builder.session_mut().document.meta.name = "Renamed".to_string();
    builder.save().await?;
    assert_eq!(builder.publish().await?, slug);
    assert_eq!(store.website_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_store_failure_leaves_document_unchanged() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let mut builder = WebsiteBuilder::new(alice(), store.clone());
    builder.add_block(&TemplateId::from("hero-modern")).await?;
    let before = builder.document().clone();

    store.set_offline(true);
    let err = builder.save().await.unwrap_err();

    assert!(err.is_retryable());
    assert_eq!(err.notification().title, "Error");
    assert_eq!(builder.document(), &before);
    assert!(!builder.is_pending(Operation::Save));

    store.set_offline(false);
    builder.save().await?;
    assert!(!builder.document().is_dirty());
    Ok(())
}

#[tokio::test]
async fn test_load_failure_is_not_empty_state() {
    let store = Arc::new(MemoryStore::new());
    store.set_offline(true);

    let err = WebsiteBuilder::open(alice(), store).await.err().unwrap();
    assert!(matches!(err, SyncError::Load(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_save_recreates_deleted_record() -> anyhow::Result<()> {
    let store = Arc::new(MemoryStore::new());
    let boundary = SyncBoundary::new(store.clone());

    let mut doc = webcraft_editor::BlockDocument::new("Ghost");
    doc.meta.remote_id = Some("removed-remotely".into());

    let saved = boundary.save(&alice(), &doc).await?;
    assert_ne!(saved.meta.remote_id, doc.meta.remote_id);
    assert_eq!(store.website_count(), 1);
    Ok(())
}

#[tokio::test]
async fn test_anonymous_user_cannot_save() {
    let store = Arc::new(MemoryStore::new());
    let mut builder = WebsiteBuilder::new(UserContext::anonymous(), store.clone());

    assert!(matches!(
        builder.save().await,
        Err(SyncError::Unauthenticated)
    ));
    assert_eq!(store.website_count(), 0);
}

#[tokio::test]
async fn test_busy_document_slot_rejects_publish() {
    let store = Arc::new(MemoryStore::new());
    let mut builder = WebsiteBuilder::new(alice(), store.clone());

    let in_flight = builder.in_flight();
    let _save = in_flight.begin(Operation::Save).unwrap();
    assert!(builder.is_pending(Operation::Save));

    let err = builder.publish().await.unwrap_err();
    assert!(matches!(err, SyncError::Busy(Operation::Save)));
    assert_eq!(store.website_count(), 0);
}

#[tokio::test]
async fn test_assistant_block_flows_into_library() -> anyhow::Result<()> {
    let store: Arc<dyn RemoteStore> = Arc::new(MemoryStore::new());
    let endpoint = ScriptedEndpoint::new(store.clone());
    let mut builder =
        WebsiteBuilder::open(alice(), store.clone()).await?.with_assistant(endpoint.clone());
    assert!(builder.library().custom().is_empty());

    let reply = builder.send_prompt("make me a pricing block").await?;
    let template_id = reply.created_template.clone().unwrap();

    assert!(template_id.is_custom());
    assert_eq!(reply.message.response.as_deref(), Some("I made a pricing block."));
    assert!(reply.message.is_generating_block);
    assert_eq!(builder.library().custom().len(), 1);
    assert_eq!(reply.notification(), Some(Notification::block_created()));

    let requests = endpoint.requests.lock().unwrap().clone();
    assert_eq!(requests[0].message_id, reply.message.id);

    // adding a custom block saves immediately
    let added = builder.add_block(&template_id).await?;
    assert_eq!(added.block.block_type, BlockType::Custom(template_id.to_string()));
    assert!(added.result.flush_required);
    assert!(!builder.document().is_dirty());

    let stored = store.latest_website(&UserId::from("alice")).await?;
    assert_eq!(stored.blocks.len(), 1);
    assert_eq!(stored.blocks[0].content.text("price").as_deref(), Some("$9"));
    Ok(())
}

#[tokio::test]
async fn test_plain_reply_creates_no_template() -> anyhow::Result<()> {
    let store: Arc<dyn RemoteStore> = Arc::new(MemoryStore::new());
    let mut builder = WebsiteBuilder::new(alice(), store.clone())
        .with_assistant(ScriptedEndpoint::new(store.clone()));

    let reply = builder.send_prompt("hello").await?;
    assert!(reply.created_template.is_none());
    assert!(reply.notification().is_none());
    assert!(builder.library().custom().is_empty());

    let history = builder.chat_history().await?;
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].message, "hello");
    Ok(())
}

#[tokio::test]
async fn test_endpoint_failure_keeps_message_without_response() -> anyhow::Result<()> {
    let store: Arc<dyn RemoteStore> = Arc::new(MemoryStore::new());
    let mut builder =
        WebsiteBuilder::new(alice(), store.clone()).with_assistant(Arc::new(DownEndpoint));

    let err = builder.send_prompt("make a block").await.unwrap_err();
    assert!(matches!(err, SyncError::Assistant(_)));
    assert!(!builder.is_pending(Operation::Assistant));

    let history = builder.chat_history().await?;
    assert_eq!(history.len(), 1);
    assert!(history[0].response.is_none());
    Ok(())
}

#[tokio::test]
async fn test_empty_prompt_is_rejected() {
    let store: Arc<dyn RemoteStore> = Arc::new(MemoryStore::new());
    let mut builder =
        WebsiteBuilder::new(alice(), store.clone()).with_assistant(Arc::new(DownEndpoint));

    assert!(matches!(
        builder.send_prompt("   ").await,
        Err(SyncError::EmptyPrompt)
    ));
    assert!(store
        .list_chat_messages(&UserId::from("alice"))
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_file_store_round_trip() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let store = Arc::new(FileStore::new(dir.path().join("webcraft.json")));

    let mut builder = WebsiteBuilder::new(alice(), store.clone());
    builder.add_block(&TemplateId::from("gallery-grid")).await?;
    builder.add_block(&TemplateId::from("footer-simple")).await?;
    builder.session_mut().move_block(1, 0)?;
    builder.save().await?;

    let reopened = WebsiteBuilder::open(alice(), store).await?;
    let types: Vec<_> = reopened
        .document()
        .blocks()
        .iter()
        .map(|b| b.block_type.as_str().to_string())
        .collect();
    assert_eq!(types, vec!["footer-simple", "gallery-grid"]);
    Ok(())
}

#[tokio::test]
async fn test_unknown_template_is_rejected() {
    let store = Arc::new(MemoryStore::new());
    let mut builder = WebsiteBuilder::new(alice(), store);

    let err = builder
        .add_block(&TemplateId::from("custom-missing"))
        .await
        .unwrap_err();
    assert!(matches!(err, SyncError::UnknownTemplate(_)));
    assert!(builder.document().is_empty());
}
