mod commands;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use mediatag_core::Library;

use commands::entities::EntityKind;
use commands::media::MediaKind;

/// mediatag — path-based auto-tagging for a media catalog
#[derive(Parser)]
#[command(name = "mediatag", version, about)]
struct Cli {
    /// Path to the catalog database
    #[arg(long, default_value_t = default_catalog_path())]
    catalog: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage performers: add or list
    Performers {
        #[command(subcommand)]
        action: Option<EntityAction>,
    },
    /// Manage tags: add or list
    Tags {
        #[command(subcommand)]
        action: Option<EntityAction>,
    },
    /// Manage studios: add or list
    Studios {
        #[command(subcommand)]
        action: Option<EntityAction>,
    },
    /// Manage media items (scenes, images, galleries)
    Media {
        #[command(subcommand)]
        action: MediaAction,
    },
    /// Auto-tag media items by matching entity names against paths
    Tag {
        #[command(subcommand)]
        target: TagTarget,
    },
    /// Show catalog status summary
    Status {
        /// Emit machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Subcommand)]
enum EntityAction {
    /// Register a new entity by display name
    Add {
        /// Display name matched against file paths
        name: String,
    },
}

#[derive(Subcommand)]
enum MediaAction {
    /// Register a media item path
    Add {
        kind: MediaKind,
        path: String,
        /// Mark the item as manually finalized (never auto-tagged)
        #[arg(long)]
        organized: bool,
    },
    /// List media items of one kind
    List { kind: MediaKind },
    /// Mark an item as organized, excluding it from auto-tagging
    Organize { kind: MediaKind, id: i64 },
}

#[derive(Subcommand)]
enum TagTarget {
    /// Tag one performer by id, or all performers
    Performers { id: Option<i64> },
    /// Tag one tag by id, or all tags
    Tags { id: Option<i64> },
    /// Tag one studio by id, or all studios
    Studios { id: Option<i64> },
    /// Tag everything: all performers, tags and studios
    All,
}

fn default_catalog_path() -> String {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
        .join(".mediatag")
        .join("catalog.db")
        .to_string_lossy()
        .to_string()
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let library = Library::open(&PathBuf::from(&cli.catalog))?;

    match cli.command {
        Commands::Performers { action } => match action {
            None => commands::entities::list(&library, EntityKind::Performers)?,
            Some(EntityAction::Add { name }) => {
                commands::entities::add(&library, EntityKind::Performers, &name)?
            }
        },
        Commands::Tags { action } => match action {
            None => commands::entities::list(&library, EntityKind::Tags)?,
            Some(EntityAction::Add { name }) => {
                commands::entities::add(&library, EntityKind::Tags, &name)?
            }
        },
        Commands::Studios { action } => match action {
            None => commands::entities::list(&library, EntityKind::Studios)?,
            Some(EntityAction::Add { name }) => {
                commands::entities::add(&library, EntityKind::Studios, &name)?
            }
        },
        Commands::Media { action } => match action {
            MediaAction::Add {
                kind,
                path,
                organized,
            } => commands::media::add(&library, kind, &path, organized)?,
            MediaAction::List { kind } => commands::media::list(&library, kind)?,
            MediaAction::Organize { kind, id } => commands::media::organize(&library, kind, id)?,
        },
        Commands::Tag { target } => match target {
            TagTarget::Performers { id } => {
                commands::tag::entities(&library, EntityKind::Performers, id)?
            }
            TagTarget::Tags { id } => commands::tag::entities(&library, EntityKind::Tags, id)?,
            TagTarget::Studios { id } => {
                commands::tag::entities(&library, EntityKind::Studios, id)?
            }
            TagTarget::All => commands::tag::all(&library)?,
        },
        Commands::Status { json } => commands::status::run(&library, json)?,
    }

    Ok(())
}
