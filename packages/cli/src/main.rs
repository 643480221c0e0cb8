mod commands;
mod config;
mod project;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    AddArgs, DeleteArgs, EditArgs, InitArgs, MoveArgs, RenderArgs, StyleArgs, TemplatesArgs,
};
use tracing_subscriber::EnvFilter;

/// WebCraft CLI - Build websites from content blocks
#[derive(Parser, Debug)]
#[command(name = "webcraft")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create webcraft.config.json
    Init(InitArgs),

    /// List block templates
    Templates(TemplatesArgs),

    /// Append a block from a template
    Add(AddArgs),

    /// Show the page's blocks in order
    List,

    /// Change a content field of a block
    Edit(EditArgs),

    /// Change a style property of a block
    Style(StyleArgs),

    /// Move a block to another position
    Move(MoveArgs),

    /// Remove a block
    Delete(DeleteArgs),

    /// Save the page to the store
    Save,

    /// Save and publish the page
    Publish,

    /// Render the page to HTML
    Render(RenderArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => commands::init(args, &cwd),
        Command::Templates(args) => commands::templates(args, &cwd).await,
        Command::Add(args) => commands::add(args, &cwd).await,
        Command::List => commands::list(&cwd).await,
        Command::Edit(args) => commands::edit(args, &cwd).await,
        Command::Style(args) => commands::style(args, &cwd).await,
        Command::Move(args) => commands::move_block(args, &cwd).await,
        Command::Delete(args) => commands::delete(args, &cwd).await,
        Command::Save => commands::save(&cwd).await,
        Command::Publish => commands::publish(&cwd).await,
        Command::Render(args) => commands::render(args, &cwd).await,
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
