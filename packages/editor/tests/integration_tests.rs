//! Integration tests for editor crate

use serde_json::json;
use webcraft_editor::{
    BlockDocument, BlockMove, BlockUpdate, DragEndPolicy, DragReorder, DragState, EditSession,
    EditorError, Mutation, MutationError,
};
use webcraft_model::{builtin_template, BlockContent, BlockId, BlockStyles, BlockType};

fn session_with(templates: &[&str]) -> EditSession {
    let mut session = EditSession::new("test-client", BlockDocument::new("Test"));
    for id in templates {
        session.add_block(builtin_template(id).unwrap()).unwrap();
    }
    session
}

fn ids(doc: &BlockDocument) -> Vec<BlockId> {
    doc.blocks().iter().map(|b| b.id.clone()).collect()
}

fn assert_positions_dense(doc: &BlockDocument) {
    for (index, block) in doc.blocks().iter().enumerate() {
        assert_eq!(block.position, index, "block {} out of place", block.id);
    }
}

#[test]
fn test_document_lifecycle() -> anyhow::Result<()> {
    let mut session = session_with(&[]);
    assert!(session.document.is_empty());
    assert!(!session.document.is_dirty());

    let hero = session.add_block(builtin_template("hero-modern").unwrap())?;
    assert_eq!(hero.block.block_type, BlockType::HeroModern);
    assert_eq!(hero.block.position, 0);
    assert!(hero.result.changed);
    assert!(!hero.result.flush_required);

    let text = session.add_block(builtin_template("content-text").unwrap())?;
    assert_eq!(text.block.position, 1);
    assert_ne!(hero.block.id, text.block.id);

    session.document.mark_saved();
    assert!(!session.document.is_dirty());

    session.update_block(&text.block.id, BlockUpdate::content_field("title", "About"))?;
    assert!(session.document.is_dirty());
    Ok(())
}

#[test]
fn test_add_copies_template_defaults() {
    let session = session_with(&["hero-modern"]);
    let block = &session.document.blocks()[0];
    let template = builtin_template("hero-modern").unwrap();

    assert_eq!(block.content, template.content);
    assert_eq!(block.styles, template.styles);
    assert!(block.id.as_str().starts_with("block-"));
}

#[test]
fn test_update_merges_content_shallowly() -> anyhow::Result<()> {
    let mut session = session_with(&["hero-modern"]);
    let id = session.document.blocks()[0].id.clone();

    session.update_block(&id, BlockUpdate::content_field("title", "Hello"))?;

    let block = session.document.get(&id).unwrap();
    assert_eq!(block.content.text("title").as_deref(), Some("Hello"));
    assert_eq!(
        block.content.text("buttonText").as_deref(),
        Some("Get Started")
    );
    Ok(())
}

#[test]
fn test_update_keeps_fields_outside_layout() -> anyhow::Result<()> {
    let mut session = session_with(&["hero-minimal"]);
    let id = session.document.blocks()[0].id.clone();
    session.document.mark_saved();

    let result = session.update_block(&id, BlockUpdate::content_field("tagline", "New"))?;
    assert!(result.changed);
    assert!(session.document.is_dirty());

    let block = session.document.get(&id).unwrap();
    assert_eq!(block.content.text("tagline").as_deref(), Some("New"));
    assert_eq!(block.content.text("title").as_deref(), Some("Simple. Elegant. Effective."));
    Ok(())
}

#[test]
fn test_stored_extra_fields_survive_reload() -> anyhow::Result<()> {
    let stored = json!({
        "id": "block-1",
        "type": "hero-modern",
        "content": {"title": "Hi", "backgroundImage": "x.png"},
        "styles": {},
        "position": 0
    });

    let block: webcraft_model::Block = serde_json::from_value(stored)?;
    let reserialized = serde_json::to_value(&block)?;
    assert_eq!(reserialized["content"]["backgroundImage"], "x.png");
    assert_eq!(reserialized["content"]["title"], "Hi");
    Ok(())
}

#[test]
fn test_style_merge_keeps_other_properties() -> anyhow::Result<()> {
    let mut session = session_with(&["hero-modern"]);
    let id = session.document.blocks()[0].id.clone();
    let before = session.document.get(&id).unwrap().styles.clone();

    let update = BlockStyles {
        padding: Some("40px".into()),
        ..Default::default()
    };
    session.update_block(&id, BlockUpdate::styles(update))?;

    let after = &session.document.get(&id).unwrap().styles;
    assert_eq!(after.padding.as_deref(), Some("40px"));
    assert_eq!(after.background_color, before.background_color);
    assert_eq!(after.text_color, before.text_color);
    assert_eq!(after.text_align, before.text_align);
    Ok(())
}

#[test]
fn test_update_unknown_block_is_noop() -> anyhow::Result<()> {
    let mut session = session_with(&["hero-modern"]);
    let snapshot = session.document.clone();

    let result = session.update_block(
        &BlockId::from("block-gone"),
        BlockUpdate::content_field("title", "x"),
    )?;

    assert!(!result.changed);
    assert_eq!(session.document, snapshot);
    Ok(())
}

#[test]
fn test_invalid_content_patch_leaves_block_untouched() {
    let mut session = session_with(&["gallery-grid"]);
    let id = session.document.blocks()[0].id.clone();
    let before = session.document.get(&id).unwrap().content.clone();

    let err = session
        .update_block(&id, BlockUpdate::content_field("images", "not-a-list"))
        .unwrap_err();

    assert!(matches!(
        err,
        EditorError::Mutation(MutationError::InvalidContent { .. })
    ));
    assert_eq!(session.document.get(&id).unwrap().content, before);
}

#[test]
fn test_delete_removes_exactly_one() -> anyhow::Result<()> {
    let mut session = session_with(&["hero-modern", "content-text", "gallery-grid", "footer-simple"]);
    let before = ids(&session.document);

    session.delete_block(&before[1])?;

    let after = ids(&session.document);
    let expected: Vec<_> = before
        .iter()
        .filter(|id| *id != &before[1])
        .cloned()
        .collect();
    assert_eq!(after, expected);
    assert_positions_dense(&session.document);

    // already gone
    let again = session.delete_block(&before[1])?;
    assert!(!again.changed);
    Ok(())
}

#[test]
fn test_drag_scenario_from_palette_page() -> anyhow::Result<()> {
    let mut session = session_with(&["hero-modern", "content-text", "gallery-grid", "footer-simple"]);
    let [a, b, c, d]: [BlockId; 4] = ids(&session.document).try_into().unwrap();

    session.drag_start(0)?;
    assert_eq!(session.drag_state(), DragState::Dragging { source: 0 });
    assert!(session.drag_indicator(0).is_source);

    assert!(session.drag_over(2));
    assert!(session.drag_indicator(2).is_drop_target);

    let moved = session.drop()?;
    assert_eq!(moved, Some(BlockMove { from: 0, to: 2 }));
    assert_eq!(ids(&session.document), vec![b, c, a, d]);
    assert_positions_dense(&session.document);
    assert_eq!(session.drag_state(), DragState::Idle);

    // the end event that follows every drop changes nothing
    let snapshot = ids(&session.document);
    assert_eq!(session.drag_end()?, None);
    assert_eq!(ids(&session.document), snapshot);
    Ok(())
}

#[test]
fn test_abandoned_drag_leaves_order() -> anyhow::Result<()> {
    let mut session = session_with(&["hero-modern", "content-text", "footer-simple"]);
    let before = ids(&session.document);

    session.drag_start(1)?;
    session.drag_over(2);
    session.drag_end()?;

    assert_eq!(ids(&session.document), before);
    assert_eq!(session.drag_state(), DragState::Idle);
    Ok(())
}

#[test]
fn test_commit_policy_moves_on_drag_end() -> anyhow::Result<()> {
    let mut session = EditSession::with_drag(
        "test-client",
        BlockDocument::new("Test"),
        DragReorder::with_policy(DragEndPolicy::Commit),
    );
    for id in ["hero-modern", "content-text", "footer-simple"] {
        session.add_block(builtin_template(id).unwrap())?;
    }
    let [a, b, c]: [BlockId; 3] = ids(&session.document).try_into().unwrap();

    session.drag_start(2)?;
    session.drag_over(0);
    assert_eq!(session.drag_end()?, Some(BlockMove { from: 2, to: 0 }));
    assert_eq!(ids(&session.document), vec![c, a, b]);
    Ok(())
}

#[test]
fn test_mutation_wire_format_applies() -> anyhow::Result<()> {
    let mut session = session_with(&["hero-modern", "footer-simple"]);
    let footer = session.document.blocks()[1].id.clone();

    let mutation: Mutation = serde_json::from_value(json!({
        "type": "moveBlock",
        "from": 1,
        "to": 0
    }))?;
    session.apply(mutation)?;
    assert_eq!(session.document.index_of(&footer), Some(0));

    let mutation: Mutation = serde_json::from_value(json!({
        "type": "updateBlock",
        "blockId": footer.as_str(),
        "update": {"styles": {"textAlign": "right"}}
    }))?;
    session.apply(mutation)?;

    let styles = &session.document.get(&footer).unwrap().styles;
    assert_eq!(styles.text_align.map(|a| a.to_string()).as_deref(), Some("right"));
    Ok(())
}

#[test]
fn test_unknown_block_type_survives_edits() -> anyhow::Result<()> {
    let mut session = session_with(&["hero-modern"]);
    let mut block = session.document.blocks()[0].clone();
    block.id = BlockId::generate();
    block.block_type = BlockType::from("pricing-table");
    block.content = BlockContent::decode(&block.block_type, json!({"tiers": 3}));
    session.apply(Mutation::AddBlock { block: block.clone() })?;

    session.move_block(1, 0)?;
    let stored = session.document.get(&block.id).unwrap();
    assert_eq!(stored.block_type.as_str(), "pricing-table");
    assert_eq!(stored.content.to_value(), json!({"tiers": 3}));
    Ok(())
}
