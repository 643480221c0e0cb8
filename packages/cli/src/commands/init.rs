use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::Path;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Name of the site
    #[arg(short, long, default_value = webcraft_sync::DEFAULT_SITE_NAME)]
    pub name: String,

    /// User the site belongs to
    #[arg(short, long, default_value = "local")]
    pub user: String,

    /// Theme (light, dark)
    #[arg(short, long, default_value = "light")]
    pub theme: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing WebCraft site...".bright_blue().bold());

    let config = Config {
        user_id: args.user,
        site_name: args.name,
        theme: args.theme,
        ..Config::default()
    };

    let config_json = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, config_json)?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    println!();
    println!("{}", "✅ Site initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: webcraft templates");
    println!("  2. Run: webcraft add hero-modern");
    println!("  3. Run: webcraft render, then open {}/index.html", config.out_dir);

    Ok(())
}
