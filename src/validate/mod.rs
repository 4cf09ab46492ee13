//! Checks run before an editor definition may be saved.
//!
//! Each check stops at the first violation so the reported message is
//! deterministic.


use crate::custom::CustomEditor;
use crate::template;

const MAX_ID_LEN: usize = 50;
const MAX_NAME_LEN: usize = 100;

/// Outcome of a validation check. `message` is empty exactly when `valid`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    /// Whether the check passed.
    pub valid: bool,
    /// Human-readable reason for the first violation, empty on success.
    pub message: String,
}

impl Validation {
    /// A passing outcome.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            valid: true,
            message: String::new(),
        }
    }

    /// A failing outcome carrying `message`.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            valid: false,
            message: message.into(),
        }
    }
}

/// Check a command template.
///
/// A template must be non-empty, reference `{EXECUTABLE}`, and contain no
/// placeholder-shaped tokens outside the known set. Unknown placeholders are
/// reported left to right, first one wins.
#[must_use]
pub fn validate_template(template: &str) -> Validation {
    if template.is_empty() {
        return Validation::fail("Template cannot be empty");
    }
    if !template.contains("{EXECUTABLE}") {
        return Validation::fail("Template must contain {EXECUTABLE} placeholder");
    }
    for token in template::PLACEHOLDER_RE.find_iter(template) {
        if !template::PLACEHOLDERS.contains(&token.as_str()) {
            return Validation::fail(format!("Unknown placeholder: {}", token.as_str()));
        }
    }
    Validation::pass()
}

/// Check an editor id.
///
/// `is_new` additionally rejects ids already present in `existing`; pass
/// `false` when re-validating an id that is being edited in place.
#[must_use]
pub fn validate_editor_id(id: &str, is_new: bool, existing: &[&str]) -> Validation {
    if id.is_empty() {
        return Validation::fail("Editor ID cannot be empty");
    }
    if !id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Validation::fail("Editor ID must contain only letters, numbers, and underscores");
    }
    if id.len() > MAX_ID_LEN {
        return Validation::fail("Editor ID must be at most 50 characters");
    }
    if is_new && existing.contains(&id) {
        return Validation::fail("Editor ID already exists");
    }
    Validation::pass()
}

/// Check a complete definition the way an add/edit form would:
/// id first, then display name, then executable, then template.
#[must_use]
pub fn validate_definition(editor: &CustomEditor, is_new: bool, existing: &[&str]) -> Validation {
    let outcome = validate_editor_id(&editor.id, is_new, existing);
    if !outcome.valid {
        return outcome;
    }
    if editor.name.is_empty() {
        return Validation::fail("Display name is required");
    }
    if editor.name.chars().count() > MAX_NAME_LEN {
        return Validation::fail("Display name must be at most 100 characters");
    }
    if editor.executable.is_empty() {
        return Validation::fail("Executable path is required");
    }
    validate_template(&editor.template)
}
