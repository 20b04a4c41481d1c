//! # CLI Layer
//!
//! This module is **one client** of the recipe library. It is the only place that:
//! - Parses arguments
//! - Talks to the terminal (stdout, stdin, exit codes)
//! - Decides where the data directory lives
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` with API, configuration and renderer
//! - `handle_*()`: Per-command handlers that call the API and print the result
//!
//! Handlers return `Ok(false)` when the command was refused (an invalid form, a bad
//! config value), so `main` can exit non-zero without treating it as a crash.

use super::browse;
use super::prompt::{confirm, DELETE_QUESTION};
use super::render::{print_messages, Renderer};
use super::setup::{Cli, Commands, FormArgs};
use clap::Parser;
use directories::ProjectDirs;
use log::{debug, warn};
use recipes::api::{CmdResult, ConfigAction, RecipeApi};
use recipes::config::{ConfigKey, RecipesConfig};
use recipes::error::{RecipeError, Result};
use recipes::form::RecipeForm;
use recipes::model::RecipeId;
use recipes::store::fs::FileStore;
use recipes::view_state::Theme;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// Overrides the data directory (recipes and config.json live there).
pub const HOME_ENV: &str = "RECIPES_HOME";

struct AppContext {
    api: RecipeApi<FileStore>,
    config: RecipesConfig,
    theme: Theme,
    renderer: Renderer,
}

pub fn run() -> Result<bool> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List { search }) => handle_list(&ctx, search),
        Some(Commands::Search { terms }) => handle_list(&ctx, Some(terms.join(" "))),
        Some(Commands::View { id }) => handle_view(&ctx, id),
        Some(Commands::Add { fields }) => handle_add(&mut ctx, fields),
        Some(Commands::Edit { id, fields }) => handle_edit(&mut ctx, id, fields),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Browse) => handle_browse(ctx),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, None),
    }
}

/// Warnings only by default; `--verbose` shows debug output. `RUST_LOG` wins over both.
fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}

fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "recipes", "recipes")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RecipeError::Store("Could not determine data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let dir = data_dir()?;
    debug!("data directory: {}", dir.display());

    let config = RecipesConfig::load(&dir).unwrap_or_else(|e| {
        warn!("ignoring unreadable config: {}", e);
        RecipesConfig::default()
    });
    let theme = Theme::from(cli.theme);
    let renderer = Renderer::new(theme, &config);
    let api = RecipeApi::open(FileStore::new(dir.clone()), dir)?;

    Ok(AppContext {
        api,
        config,
        theme,
        renderer,
    })
}

fn finish(result: &CmdResult) -> bool {
    print_messages(&result.messages);
    !result.has_errors()
}

fn handle_list(ctx: &AppContext, search: Option<String>) -> Result<bool> {
    let result = ctx.api.list(search.as_deref())?;
    print!("{}", ctx.renderer.render_nav(search.as_deref().unwrap_or_default()));
    print!("{}", ctx.renderer.render_list(&result.listed_recipes));
    Ok(finish(&result))
}

fn handle_view(ctx: &AppContext, id: RecipeId) -> Result<bool> {
    let result = ctx.api.view(id)?;
    for recipe in &result.listed_recipes {
        print!("{}", ctx.renderer.render_detail(recipe, false));
    }
    Ok(finish(&result))
}

fn handle_add(ctx: &mut AppContext, fields: FormArgs) -> Result<bool> {
    let mut form = RecipeForm::new();
    fields.apply_to(&mut form);
    let result = ctx.api.add(&form)?;
    Ok(finish(&result))
}

fn handle_edit(ctx: &mut AppContext, id: RecipeId, fields: FormArgs) -> Result<bool> {
    let mut form = ctx.api.edit_form(id)?;
    fields.apply_to(&mut form);
    let result = ctx.api.update(id, &form)?;
    Ok(finish(&result))
}

fn handle_delete(ctx: &mut AppContext, id: RecipeId, yes: bool) -> Result<bool> {
    let title = ctx.api.get(id)?.title.clone();

    if !yes {
        println!("{}", title);
        let stdin = io::stdin();
        if !confirm(DELETE_QUESTION, &mut stdin.lock(), &mut io::stdout())? {
            println!("Delete cancelled.");
            return Ok(true);
        }
    }

    let result = ctx.api.delete(id)?;
    Ok(finish(&result))
}

fn handle_browse(ctx: AppContext) -> Result<bool> {
    let use_color = io::stdout().is_terminal();
    let mut session = ctx.api.into_session(ctx.theme);
    let stdin = io::stdin();
    browse::run(
        &mut session,
        &ctx.config,
        use_color,
        &mut stdin.lock(),
        &mut io::stdout(),
    )?;
    Ok(true)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<bool> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config(action)?;
    if let (true, Some(config)) = (show_all, &result.config) {
        for key in ConfigKey::ALL {
            println!("{} = {}", key.name(), config.get(key));
        }
    }
    Ok(finish(&result))
}
