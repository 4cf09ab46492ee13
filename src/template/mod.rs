//! Command-template resolution for user-defined editors.
//!
//! A template is a whitespace-separated command line containing placeholder
//! tokens. Resolution substitutes context values and splits the result into
//! the argument vector handed to the launcher. There is no quoting syntax:
//! a substituted path containing a space becomes two arguments.

#[cfg(test)]
mod tests;

use regex::Regex;
use std::sync::LazyLock;

use crate::context::EditorContext;
use crate::custom::CustomEditor;

/// The placeholder tokens a template may contain.
pub const PLACEHOLDERS: [&str; 5] = ["{EXECUTABLE}", "{PROJECT}", "{FILE}", "{LINE}", "{COLUMN}"];

/// Matches anything shaped like a placeholder, known or not.
pub(crate) static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[A-Z_]+\}").expect("valid placeholder regex"));

/// Expand `editor`'s command template against `ctx` and tokenize the result.
///
/// Placeholders whose context value is absent vanish rather than staying
/// literal, so `{EXECUTABLE} {PROJECT} {FILE}` degrades to just the
/// executable when nothing is open. Substitution is a single pass: values
/// inserted for one placeholder are never re-scanned for others.
///
/// Total for definitions that passed [`crate::validate::validate_template`];
/// an unknown placeholder that slipped through is left as literal text.
#[must_use]
pub fn resolve(editor: &CustomEditor, ctx: &EditorContext) -> Vec<String> {
    let rendered = PLACEHOLDER_RE.replace_all(&editor.template, |caps: &regex::Captures| {
        match caps.get(0).map_or("", |m| m.as_str()) {
            "{EXECUTABLE}" => editor.executable.clone(),
            "{PROJECT}" => ctx.project_path.clone().unwrap_or_default(),
            "{FILE}" => ctx.file_path.clone().unwrap_or_default(),
            "{LINE}" if ctx.file_path.is_some() => ctx.line.to_string(),
            "{COLUMN}" if ctx.file_path.is_some() => ctx.column.to_string(),
            "{LINE}" | "{COLUMN}" => String::new(),
            other => other.to_string(),
        }
    });

    rendered.split_whitespace().map(str::to_string).collect()
}
