use crate::project::Project;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::Path;
use webcraft_model::{CategoryFilter, TemplateFilter};

#[derive(Debug, Args)]
pub struct TemplatesArgs {
    /// Category (all, hero, content, gallery, contact, footer, custom)
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Only templates whose name contains this text
    #[arg(short, long, default_value = "")]
    pub search: String,
}

pub async fn templates(args: TemplatesArgs, cwd: &Path) -> Result<()> {
    let project = Project::load(cwd)?;
    let builder = project.open().await?;

    let category: CategoryFilter = args
        .category
        .parse()
        .map_err(|_| anyhow!("Unknown category: {}", args.category))?;
    let filter = TemplateFilter {
        category,
        search: args.search,
    };

    let mut count = 0;
    for template in builder.templates(&filter) {
        count += 1;
        println!(
            "  {} {:<24} {:<18} {}",
            template.icon,
            template.id.as_str().bright_white(),
            template.name,
            template.preview.dimmed()
        );
    }

    if count == 0 {
        println!("{}", "⚠️  No templates found".yellow());
    }
    Ok(())
}
