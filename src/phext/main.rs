use clap::Parser;
use directories::ProjectDirs;
use phext::api::{ConfigAction, PhextApi, PhextPaths};
use phext::config::PhextConfig;
use phext::editor::{edit_scroll, from_buffer};
use phext::error::{PhextError, Result};
use phext::store::fs::FileStore;
use std::env;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

mod args;
mod print;
use args::{Cli, Commands};
use print::{print_config, print_messages, print_phexts, print_scrolls, print_toc};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: PhextApi<FileStore>,
    label: Option<String>,
}

impl AppContext {
    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Init) => handle_init(&ctx),
        Some(Commands::Select { coordinate }) => handle_select(&ctx, coordinate),
        Some(Commands::Insert { at, text }) => handle_insert(&mut ctx, at, text),
        Some(Commands::Update { at, text }) => handle_update(&mut ctx, at, text),
        Some(Commands::Edit { coordinate }) => handle_edit(&mut ctx, coordinate),
        Some(Commands::Delete { coordinate }) => handle_delete(&mut ctx, coordinate),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Goto { coordinate }) => handle_goto(&mut ctx, coordinate),
        Some(Commands::Jump { axis, value }) => handle_jump(&mut ctx, axis, value),
        Some(Commands::Next { axis }) => handle_step(&mut ctx, axis, true),
        Some(Commands::Prev { axis }) => handle_step(&mut ctx, axis, false),
        Some(Commands::Raw) => handle_raw(&ctx),
        Some(Commands::Normalize) => handle_normalize(&mut ctx),
        Some(Commands::Import { path }) => handle_import(&mut ctx, path),
        Some(Commands::Export { path }) => handle_export(&ctx, path),
        Some(Commands::Push { at, path }) => handle_push(&mut ctx, at, path),
        Some(Commands::Pull { at, path }) => handle_pull(&ctx, at, path),
        Some(Commands::Slurp { at, dir }) => handle_slurp(&mut ctx, at, dir),
        Some(Commands::JsonExport { path }) => handle_json_export(&ctx, path),
        Some(Commands::Toc) => handle_toc(&ctx),
        Some(Commands::Phexts) => handle_phexts(&ctx),
        Some(Commands::Remove) => handle_remove(&mut ctx),
        Some(Commands::Path) => handle_path(&ctx),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
    }
}

/// `warn` unless -v; RUST_LOG wins over both.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn store_root() -> Result<PathBuf> {
    if let Some(home) = env::var_os("PHEXT_HOME").filter(|h| !h.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("io", "phext", "phext")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| PhextError::Store("Could not determine data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let root = store_root()?;
    let config = PhextConfig::load(&root)?;
    let store = FileStore::new(root.clone());
    let api = PhextApi::new(store, PhextPaths::new(root), config);

    Ok(AppContext {
        api,
        label: cli.label.clone(),
    })
}

/// Joins word arguments, or reads stdin when none were given.
fn read_text(words: Vec<String>) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut stdin = io::stdin();
    if !stdin.is_terminal() {
        let mut buffer = String::new();
        stdin.read_to_string(&mut buffer)?;
        if !buffer.is_empty() {
            return Ok(from_buffer(&buffer));
        }
    }

    Err(PhextError::Api(
        "No text given. Pass it as arguments or pipe it on stdin.".to_string(),
    ))
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init()?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_select(ctx: &AppContext, coordinate: Option<String>) -> Result<()> {
    let result = ctx.api.select(ctx.label(), coordinate.as_deref())?;
    if let Some(text) = result.selected.and_then(|s| s.text) {
        println!("{}", text);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_insert(ctx: &mut AppContext, at: Option<String>, text: Vec<String>) -> Result<()> {
    let text = read_text(text)?;
    let label = ctx.label.clone();
    let result = ctx.api.insert(label.as_deref(), at.as_deref(), &text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, at: Option<String>, text: Vec<String>) -> Result<()> {
    let text = read_text(text)?;
    let label = ctx.label.clone();
    let result = ctx.api.update(label.as_deref(), at.as_deref(), &text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_edit(ctx: &mut AppContext, coordinate: Option<String>) -> Result<()> {
    let label = ctx.label.clone();
    let (target, initial) = match ctx.api.select(label.as_deref(), coordinate.as_deref()) {
        Ok(result) => match result.selected {
            Some(selected) => (
                selected.coordinate.to_string(),
                selected.text.unwrap_or_default(),
            ),
            None => return Ok(()),
        },
        // Editing a document that does not exist yet starts it
        Err(PhextError::PhextNotFound(_)) => (
            coordinate.unwrap_or_else(|| phext::Coordinate::ORIGIN.to_string()),
            String::new(),
        ),
        Err(e) => return Err(e),
    };

    let edited = edit_scroll(&initial)?;
    if edited == initial {
        println!("No changes.");
        return Ok(());
    }

    let result = ctx.api.update(label.as_deref(), Some(&target), &edited)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, coordinate: Option<String>) -> Result<()> {
    let label = ctx.label.clone();
    let result = ctx.api.delete(label.as_deref(), coordinate.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list(ctx.label())?;
    print_scrolls(&result.listed_scrolls, ctx.api.config().preview_width);
    print_messages(&result.messages);
    Ok(())
}

fn handle_goto(ctx: &mut AppContext, coordinate: String) -> Result<()> {
    let label = ctx.label.clone();
    let result = ctx.api.goto(label.as_deref(), &coordinate)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_jump(ctx: &mut AppContext, axis: String, value: u32) -> Result<()> {
    let label = ctx.label.clone();
    let result = ctx.api.jump(label.as_deref(), &axis, value)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_step(ctx: &mut AppContext, axis: String, forward: bool) -> Result<()> {
    let label = ctx.label.clone();
    let result = ctx.api.step(label.as_deref(), &axis, forward)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_raw(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.raw(ctx.label())?;
    if let Some(raw) = result.raw {
        let mut stdout = io::stdout();
        stdout.write_all(raw.as_bytes())?;
        stdout.flush()?;
    }
    Ok(())
}

fn handle_normalize(ctx: &mut AppContext) -> Result<()> {
    let label = ctx.label.clone();
    let result = ctx.api.normalize(label.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, path: String) -> Result<()> {
    let label = ctx.label.clone();
    let result = ctx.api.import(label.as_deref(), Path::new(&path))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, path: String) -> Result<()> {
    let result = ctx.api.export(ctx.label(), Path::new(&path))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_push(ctx: &mut AppContext, at: Option<String>, path: String) -> Result<()> {
    let label = ctx.label.clone();
    let result = ctx.api.push(label.as_deref(), at.as_deref(), Path::new(&path))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_pull(ctx: &AppContext, at: Option<String>, path: String) -> Result<()> {
    let result = ctx.api.pull(ctx.label(), at.as_deref(), Path::new(&path))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_slurp(ctx: &mut AppContext, at: Option<String>, dir: String) -> Result<()> {
    let label = ctx.label.clone();
    let result = ctx.api.slurp(label.as_deref(), at.as_deref(), Path::new(&dir))?;
    print_scrolls(&result.listed_scrolls, ctx.api.config().preview_width);
    print_messages(&result.messages);
    Ok(())
}

fn handle_json_export(ctx: &AppContext, path: Option<String>) -> Result<()> {
    let result = ctx
        .api
        .json_export(ctx.label(), path.as_deref().map(Path::new))?;
    if let Some(json) = result.raw {
        println!("{}", json);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_toc(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.toc(ctx.label())?;
    print_toc(&result.toc, ctx.api.config().preview_width);
    print_messages(&result.messages);
    Ok(())
}

fn handle_phexts(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.phexts()?;
    print_phexts(&result.listed_phexts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_remove(ctx: &mut AppContext) -> Result<()> {
    let label = ctx.label.clone();
    let result = ctx.api.remove(label.as_deref())?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_path(ctx: &AppContext) -> Result<()> {
    let path = ctx.api.phext_path(ctx.label())?;
    println!("{}", path.display());
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key.as_deref(), value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k.to_string()),
        (Some("default-label"), Some(v)) => ConfigAction::SetDefaultLabel(v),
        (Some("preview-width"), Some(v)) => ConfigAction::SetPreviewWidth(v),
        (Some(k), Some(_)) => {
            return Err(PhextError::Api(format!("Unknown config key: {}", k)));
        }
    };
    let show_key = match &action {
        ConfigAction::ShowKey(k) => Some(k.clone()),
        _ => None,
    };
    let show_all = matches!(action, ConfigAction::ShowAll);

    let result = ctx.api.config_action(action)?;
    if let Some(config) = &result.config {
        if show_all || show_key.is_some() {
            print_config(config, show_key.as_deref());
        }
    }
    print_messages(&result.messages);
    Ok(())
}
