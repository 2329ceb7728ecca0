use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use fate::cli::{CliArgs, OutputFormat, StartupConfig};
use fate::config::EditorConfig;
use fate::editor::Editor;
use fate::input::parse_key_script;
use fate::keymap::{load_default_keymap, Keymap};
use fate::model::{Labeling, Session, SessionDump};

fn load_session(config: &StartupConfig) -> Result<Session> {
    let mut session = match &config.path {
        Some(path) => {
            let text = read_text(path)?;
            Session::with_text(&text).with_filename(path)
        }
        None => Session::new(),
    };
    if let Some(labels) = &config.labels {
        session = session.with_labeling(Labeling::load(labels)?);
    }
    Ok(session)
}

fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        tracing::info!("{} does not exist yet, starting empty", path.display());
        return Ok(String::new());
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_output(editor: &Editor, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => print!("{}", editor.session.text()),
        OutputFormat::View => {
            let layout = editor.layout()?;
            println!("{}", layout.marked_text());
            println!("{}", editor.status_line());
        }
        OutputFormat::Json => {
            let dump = serde_json::json!({
                "session": SessionDump::from(&editor.session),
                "mode": editor.mode.name(),
                "status": editor.status,
            });
            println!("{}", serde_json::to_string_pretty(&dump)?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    fate::tracing::init();

    let args = CliArgs::parse();
    let editor_config = EditorConfig::load();
    let config = args
        .into_config(&editor_config)
        .map_err(anyhow::Error::msg)?;

    let session = load_session(&config)?;
    let keys = parse_key_script(&config.keys).context("Invalid key script")?;
    let keymap = Keymap::with_bindings(load_default_keymap());

    let mut editor =
        Editor::new(session, keymap).with_view_size(config.wrap_width, config.visible_lines);
    tracing::info!(
        file = %editor.session.display_name(),
        keys = keys.len(),
        "playing key script"
    );
    editor.play(&keys);

    print_output(&editor, config.output)
}
