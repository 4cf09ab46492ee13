
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// A user-defined editor, driven entirely by its command template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomEditor {
    /// Unique identifier: letters, digits, and underscores only.
    pub id: String,
    /// Human-readable name shown in listings.
    pub name: String,
    /// Value substituted for `{EXECUTABLE}` in the template.
    pub executable: String,
    /// Command template, e.g. `{EXECUTABLE} {PROJECT} --goto {FILE}:{LINE}:{COLUMN}`.
    pub template: String,
    /// Optional emoji shown next to the name.
    pub icon: String,
    /// Optional keyboard shortcut hint, e.g. "ctrl alt W".
    pub shortcut: String,
    /// Disabled editors are kept in the config but refuse to launch.
    pub enabled: bool,
    /// Offer this editor in a host status-bar menu.
    pub show_in_status_bar: bool,
    /// Offer this editor in a host context menu.
    pub show_in_context_menu: bool,
    /// Offer this editor in a host tools menu.
    pub show_in_tools_menu: bool,
}

impl Default for CustomEditor {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            executable: String::new(),
            template: String::new(),
            icon: String::new(),
            shortcut: String::new(),
            enabled: true,
            show_in_status_bar: true,
            show_in_context_menu: true,
            show_in_tools_menu: true,
        }
    }
}

impl CustomEditor {
    /// A definition is usable once id, name, executable, and template are all
    /// filled in and the template references the executable.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty()
            && !self.name.is_empty()
            && !self.executable.is_empty()
            && !self.template.is_empty()
            && self.template.contains("{EXECUTABLE}")
    }

    /// Display name with the icon prefix when one is set.
    #[must_use]
    pub fn label(&self) -> String {
        if self.icon.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.icon, self.name)
        }
    }
}

/// Which part of a host UI an editor entry may appear in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Status-bar switcher menu.
    StatusBar,
    /// Right-click context menu.
    ContextMenu,
    /// Tools menu.
    ToolsMenu,
}

/// Ordered collection of custom editor definitions, unique by id.
///
/// Mutations validate and refuse rather than fail: `add` and `update` report
/// success as a bool, mirroring how a settings UI consumes them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorSet {
    editors: Vec<CustomEditor>,
}

impl EditorSet {
    /// Append a definition. Refused when the id is taken or the definition is
    /// incomplete.
    pub fn add(&mut self, editor: CustomEditor) -> bool {
        if self.editors.iter().any(|e| e.id == editor.id) {
            warn!(id = %editor.id, "custom editor id already exists");
            return false;
        }
        if !editor.is_valid() {
            warn!(id = %editor.id, "rejected incomplete custom editor definition");
            return false;
        }
        info!(id = %editor.id, name = %editor.name, "added custom editor");
        self.editors.push(editor);
        true
    }

    /// Replace the definition stored under `id`. Refused when `id` is absent
    /// or the replacement is incomplete.
    pub fn update(&mut self, id: &str, editor: CustomEditor) -> bool {
        let Some(index) = self.editors.iter().position(|e| e.id == id) else {
            warn!(id, "custom editor not found");
            return false;
        };
        if !editor.is_valid() {
            warn!(id, "rejected incomplete custom editor definition");
            return false;
        }
        info!(id, "updated custom editor");
        self.editors[index] = editor;
        true
    }

    /// Remove the definition stored under `id`; returns whether one existed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.editors.len();
        self.editors.retain(|e| e.id != id);
        let removed = self.editors.len() != before;
        if removed {
            info!(id, "removed custom editor");
        }
        removed
    }

    /// Look up a definition by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CustomEditor> {
        self.editors.iter().find(|e| e.id == id)
    }

    /// Every definition, in insertion order.
    #[must_use]
    pub fn all(&self) -> &[CustomEditor] {
        &self.editors
    }

    /// Every stored id, in insertion order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.editors.iter().map(|e| e.id.as_str()).collect()
    }

    /// Enabled definitions, in insertion order.
    pub fn enabled(&self) -> impl Iterator<Item = &CustomEditor> {
        self.editors.iter().filter(|e| e.enabled)
    }

    /// Enabled definitions that opted into `surface`.
    #[must_use]
    pub fn enabled_for(&self, surface: Surface) -> Vec<&CustomEditor> {
        self.enabled()
            .filter(|e| match surface {
                Surface::StatusBar => e.show_in_status_bar,
                Surface::ContextMenu => e.show_in_context_menu,
                Surface::ToolsMenu => e.show_in_tools_menu,
            })
            .collect()
    }
}
