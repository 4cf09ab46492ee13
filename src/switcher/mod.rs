//! The switch layer: from an editor name and a context to a running process.
//!
//! Resolution is pure and happens entirely before the launch attempt, so a
//! failed launch leaves no partial state behind.


use anyhow::{bail, Result};
use tracing::{info, warn};

use crate::builtin::{self, BuiltinEditor};
use crate::config::Config;
use crate::context::EditorContext;
use crate::launcher;
use crate::template;

/// Resolve `editor` (a built-in name or a custom id) into the argument
/// vector that would be launched. Built-in names win over custom ids.
pub fn resolve(editor: &str, config: &Config, ctx: &EditorContext) -> Result<Vec<String>> {
    match BuiltinEditor::from_name(editor) {
        Some(kind) => resolve_builtin(kind, config, ctx),
        None => resolve_custom(editor, config, ctx),
    }
}

/// Resolve the argument vector for a built-in editor.
/// Fails when the kind has no configured executable path.
pub fn resolve_builtin(
    kind: BuiltinEditor,
    config: &Config,
    ctx: &EditorContext,
) -> Result<Vec<String>> {
    let path = config.editors.path(kind);
    if path.is_empty() {
        warn!(editor = kind.name(), "editor path not configured");
        bail!(
            "{} is not configured. Run `edswitch detect` or `edswitch config set editors.{} <path>`",
            kind.display_name(),
            kind.name()
        );
    }
    Ok(builtin::build_command(kind, path, ctx))
}

/// Resolve the argument vector for a custom editor.
/// Fails for an unknown id and for a disabled definition.
pub fn resolve_custom(id: &str, config: &Config, ctx: &EditorContext) -> Result<Vec<String>> {
    let Some(editor) = config.custom.get(id) else {
        warn!(id, "no editor with this name");
        bail!("No editor named {id}. Run `edswitch list` to see what is configured");
    };
    if !editor.enabled {
        warn!(id, "custom editor is disabled");
        bail!("Custom editor {id} is disabled. Enable it with `edswitch custom update {id} --enabled true`");
    }
    Ok(template::resolve(editor, ctx))
}

/// Resolve `editor` and launch it detached.
pub fn switch(editor: &str, config: &Config, ctx: &EditorContext) -> Result<()> {
    let argv = resolve(editor, config, ctx)?;
    launcher::launch(&argv)?;
    info!(editor, line = ctx.line, column = ctx.column, "switched editor");
    Ok(())
}
