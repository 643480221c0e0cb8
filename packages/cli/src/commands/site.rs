use crate::project::Project;
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

pub async fn save(cwd: &Path) -> Result<()> {
    let project = Project::load(cwd)?;
    let mut builder = project.open().await?;

    builder.save().await?;
    project.write_draft(builder.document())?;

    let meta = &builder.document().meta;
    println!(
        "  {} Saved {} ({} blocks)",
        "✓".green(),
        meta.name.bright_white(),
        builder.document().len()
    );
    if let Some(id) = &meta.remote_id {
        println!("    record {}", id.as_str().dimmed());
    }
    Ok(())
}

pub async fn publish(cwd: &Path) -> Result<()> {
    let project = Project::load(cwd)?;
    let mut builder = project.open().await?;

    let slug = builder.publish().await?;
    project.write_draft(builder.document())?;

    println!("{}", "🚀 Published!".green().bold());
    println!("   URL: /{}", slug.bright_white());
    Ok(())
}
