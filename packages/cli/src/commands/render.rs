use crate::project::Project;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;
use webcraft_compiler_html::{compile_to_html, CompileOptions};

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Fail on unknown or damaged blocks instead of rendering placeholders
    #[arg(long)]
    pub strict: bool,

    /// Single-line output
    #[arg(long)]
    pub compact: bool,
}

pub async fn render(args: RenderArgs, cwd: &Path) -> Result<()> {
    let project = Project::load(cwd)?;
    let builder = project.open().await?;

    let options = CompileOptions {
        strict: args.strict,
        pretty: !args.compact,
        ..Default::default()
    };
    let html = compile_to_html(builder.document(), options)?;

    if args.stdout {
        println!("{}", html);
        return Ok(());
    }

    let out_dir = match &args.out_dir {
        Some(dir) => cwd.join(dir),
        None => project.config.out_dir(cwd),
    };
    fs::create_dir_all(&out_dir)?;
    let output_file = out_dir.join("index.html");
    fs::write(&output_file, html)?;

    println!(
        "  {} Rendered {} blocks → {}",
        "✓".green(),
        builder.document().len(),
        output_file.display()
    );
    Ok(())
}
