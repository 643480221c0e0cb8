use crate::project::{resolve_block, Project};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::Path;
use webcraft_editor::BlockUpdate;
use webcraft_model::{BlockStyles, TemplateId};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Template id (see `webcraft templates`)
    pub template: String,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Block position or id
    pub block: String,

    /// Content field, e.g. title, subtitle, buttonText
    pub field: String,

    /// New value. Values starting with `[` are parsed as JSON lists.
    pub value: String,
}

#[derive(Debug, Args)]
pub struct StyleArgs {
    /// Block position or id
    pub block: String,

    /// Style property, e.g. backgroundColor, padding, textAlign
    pub property: String,

    pub value: String,
}

#[derive(Debug, Args)]
pub struct MoveArgs {
    /// Current position
    pub from: usize,

    /// New position
    pub to: usize,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Block position or id
    pub block: String,
}

pub async fn add(args: AddArgs, cwd: &Path) -> Result<()> {
    let project = Project::load(cwd)?;
    let mut builder = project.open().await?;

    let added = builder.add_block(&TemplateId::from(args.template)).await?;
    project.write_draft(builder.document())?;

    println!(
        "  {} Added {} at position {}",
        "✓".green(),
        added.block.id.as_str().bright_white(),
        added.block.position
    );
    if added.result.flush_required {
        println!("  {} Saved custom block to the store", "✓".green());
    }
    Ok(())
}

pub async fn list(cwd: &Path) -> Result<()> {
    let project = Project::load(cwd)?;
    let builder = project.open().await?;
    let document = builder.document();

    println!(
        "{} ({} blocks)",
        document.meta.name.bright_blue().bold(),
        document.len()
    );
    if let Some(slug) = &document.meta.publish_url {
        println!("  published at /{}", slug);
    }
    for block in document.blocks() {
        let title = block.content.text("title").unwrap_or_default();
        println!(
            "  {:>2}  {:<40} {:<16} {}",
            block.position,
            block.id.as_str().dimmed(),
            block.block_type.as_str(),
            title
        );
    }
    Ok(())
}

pub async fn edit(args: EditArgs, cwd: &Path) -> Result<()> {
    let project = Project::load(cwd)?;
    let mut builder = project.open().await?;

    let id = resolve_block(builder.document(), &args.block)?;
    let value = if args.value.trim_start().starts_with('[') {
        serde_json::from_str(&args.value)?
    } else {
        serde_json::Value::String(args.value)
    };
    builder
        .session_mut()
        .update_block(&id, BlockUpdate::content_field(args.field, value))?;
    project.write_draft(builder.document())?;

    println!("  {} Updated {}", "✓".green(), id);
    Ok(())
}

pub async fn style(args: StyleArgs, cwd: &Path) -> Result<()> {
    let project = Project::load(cwd)?;
    let mut builder = project.open().await?;

    let id = resolve_block(builder.document(), &args.block)?;
    let mut styles = BlockStyles::default();
    if !styles.set(&args.property, args.value.clone()) {
        return Err(anyhow!("Invalid style {}: {}", args.property, args.value));
    }
    builder
        .session_mut()
        .update_block(&id, BlockUpdate::styles(styles))?;
    project.write_draft(builder.document())?;

    println!("  {} Styled {}", "✓".green(), id);
    Ok(())
}

pub async fn move_block(args: MoveArgs, cwd: &Path) -> Result<()> {
    let project = Project::load(cwd)?;
    let mut builder = project.open().await?;

    let result = builder.session_mut().move_block(args.from, args.to)?;
    project.write_draft(builder.document())?;

    if result.changed {
        println!("  {} Moved {} → {}", "✓".green(), args.from, args.to);
    } else {
        println!("  Nothing to move");
    }
    Ok(())
}

pub async fn delete(args: DeleteArgs, cwd: &Path) -> Result<()> {
    let project = Project::load(cwd)?;
    let mut builder = project.open().await?;

    let id = resolve_block(builder.document(), &args.block)?;
    builder.session_mut().delete_block(&id)?;
    project.write_draft(builder.document())?;

    println!("  {} Deleted {}", "✓".green(), id);
    Ok(())
}
