//! # CLI Layer
//!
//! One possible client of the library. This is the only place that parses
//! arguments, prints to the terminal and decides exit codes; everything it
//! does goes through [`SolidApi`].
//!
//! - `run()`: parses arguments, sets up logging, dispatches
//! - `init_context()`: resolves the data directory and builds the API
//! - `handle_*()`: call the API and print the `CmdResult`

use super::logging;
use super::print::{print_config, print_entries, print_messages, print_products, print_shapes};
use super::setup::{Cli, Commands, JournalCommands};
use clap::Parser;
use directories::ProjectDirs;
use solid::api::{ConfigAction, ProductQuery, SolidApi, SolidPaths};
use solid::config::SolidConfig;
use solid::error::{Result, SolidError};
use solid::model::{Color, Size};
use solid::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;

const HOME_ENV: &str = "SOLID_HOME";

struct AppContext {
    api: SolidApi<FileStore>,
    config: SolidConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Journal(cmd)) => match cmd {
            JournalCommands::Add { text } => handle_add(&mut ctx, text.join(" ")),
            JournalCommands::Remove { position } => handle_remove(&mut ctx, position),
            JournalCommands::Show => handle_show(&ctx),
            JournalCommands::Save { path } => handle_save(&ctx, path),
            JournalCommands::Clear => handle_clear(&mut ctx),
        },
        Some(Commands::Products {
            color,
            size,
            criteria,
            catalog,
        }) => handle_products(&ctx, color, size, criteria, catalog),
        Some(Commands::Shapes {
            width,
            height,
            side,
        }) => handle_shapes(&ctx, width, height, side),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_show(&ctx),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "solid", "solid")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| SolidError::Config("Could not determine data dir".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    debug!(data_dir = %data_dir.display(), "resolved data directory");

    let config = SolidConfig::load(&data_dir)?;
    let store = FileStore::new(data_dir.clone());
    let api = SolidApi::new(store, SolidPaths::new(data_dir));

    Ok(AppContext { api, config })
}

fn handle_add(ctx: &mut AppContext, text: String) -> Result<()> {
    let result = ctx.api.add_entry(&text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext, position: usize) -> Result<()> {
    let result = ctx.api.remove_entry(position)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_show(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.show_journal()?;
    print_entries(&result.entries);
    print_messages(&result.messages);
    Ok(())
}

fn handle_save(ctx: &AppContext, path: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.export_journal(path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear_journal()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_products(
    ctx: &AppContext,
    color: Option<Color>,
    size: Option<Size>,
    criteria: Vec<String>,
    catalog: Option<PathBuf>,
) -> Result<()> {
    let catalog = catalog.or_else(|| ctx.config.catalog.clone());
    let query = ProductQuery {
        color,
        size,
        criteria,
    };

    let result = ctx.api.filter_products(catalog.as_deref(), &query)?;
    print_products(&result.products);
    print_messages(&result.messages);
    Ok(())
}

fn handle_shapes(ctx: &AppContext, width: u32, height: u32, side: u32) -> Result<()> {
    let result = ctx.api.check_shapes(width, height, side)?;
    print_shapes(&result.shapes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        if result.messages.is_empty() {
            print_config(config);
        }
    }
    print_messages(&result.messages);
    Ok(())
}
