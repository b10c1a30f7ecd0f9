use super::render::{print_messages, render_todo_list};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use itask::api::TodoApi;
use itask::config::{ConfigKey, ItaskConfig};
use itask::error::{ItaskError, Result};
use itask::logging;
use itask::persistence::Persistence;
use itask::store::FsBackend;
use itask::todo_store::TodoStore;
use std::path::PathBuf;

const HOME_ENV: &str = "ITASK_HOME";

struct AppContext {
    api: TodoApi<FsBackend>,
    config: ItaskConfig,
    data_dir: PathBuf,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Add { text }) => handle_add(&mut ctx, text.join(" ")),
        Some(Commands::Toggle { indexes }) => handle_toggle(&mut ctx, indexes),
        Some(Commands::Delete { indexes }) => handle_delete(&mut ctx, indexes),
        Some(Commands::Edit { index, text }) => {
            let text = if text.is_empty() {
                None
            } else {
                Some(text.join(" "))
            };
            handle_edit(&mut ctx, index, text)
        }
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        Some(Commands::Path) => handle_path(&ctx),
    }
}

fn resolve_data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "itask", "itask")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ItaskError::Api("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = resolve_data_dir(cli)?;
    let config = ItaskConfig::load(&data_dir)?;
    logging::init(&config, cli.verbose);

    let persistence = Persistence::new(FsBackend::new(data_dir.clone()), &config.storage_key);
    let api = TodoApi::new(TodoStore::new(persistence));

    Ok(AppContext {
        api,
        config,
        data_dir,
    })
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list();
    print!("{}", render_todo_list(&result.listed_todos));
    print_messages(&result.messages);
    Ok(())
}

fn handle_add(ctx: &mut AppContext, text: String) -> Result<()> {
    let result = ctx.api.add(text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, indexes: Vec<String>) -> Result<()> {
    let result = ctx.api.delete(&indexes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, index: String, text: Option<String>) -> Result<()> {
    let result = ctx.api.edit(&index, text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for key in ConfigKey::all() {
                println!("{} = {}", key.name(), ctx.config.get(*key));
            }
        }
        (Some(name), None) => {
            let key = ConfigKey::parse(&name)?;
            println!("{} = {}", key.name(), ctx.config.get(key));
        }
        (Some(name), Some(value)) => {
            let key = ConfigKey::parse(&name)?;
            ctx.config.set(key, &value)?;
            ctx.config.save(&ctx.data_dir)?;
            println!("{} = {}", key.name(), ctx.config.get(key));
        }
    }
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.storage_path();
    for path in &result.paths {
        println!("{}", path.display());
    }
    Ok(())
}
