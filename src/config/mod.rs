mod ops;


use serde::{Deserialize, Serialize};

use crate::builtin::BuiltinEditor;
use crate::custom::EditorSet;

/// On-disk configuration: executable paths for the built-in editors plus the
/// custom editor definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configured paths for the built-in editors.
    pub editors: BuiltinPaths,
    /// User-defined editors.
    pub custom: EditorSet,
}

/// Executable path per built-in editor; empty means unconfigured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuiltinPaths {
    pub kiro: String,
    pub vscode: String,
    pub sublime: String,
    pub atom: String,
    pub notepadpp: String,
    pub vim: String,
    pub emacs: String,
    pub cursor: String,
    pub zed: String,
}

impl BuiltinPaths {
    /// Configured path for `kind`; empty when unconfigured.
    #[must_use]
    pub fn path(&self, kind: BuiltinEditor) -> &str {
        match kind {
            BuiltinEditor::Kiro => &self.kiro,
            BuiltinEditor::VsCode => &self.vscode,
            BuiltinEditor::Sublime => &self.sublime,
            BuiltinEditor::Atom => &self.atom,
            BuiltinEditor::NotepadPlusPlus => &self.notepadpp,
            BuiltinEditor::Vim => &self.vim,
            BuiltinEditor::Emacs => &self.emacs,
            BuiltinEditor::Cursor => &self.cursor,
            BuiltinEditor::Zed => &self.zed,
        }
    }

    /// Overwrite the path stored for `kind`.
    pub fn set_path(&mut self, kind: BuiltinEditor, path: String) {
        match kind {
            BuiltinEditor::Kiro => self.kiro = path,
            BuiltinEditor::VsCode => self.vscode = path,
            BuiltinEditor::Sublime => self.sublime = path,
            BuiltinEditor::Atom => self.atom = path,
            BuiltinEditor::NotepadPlusPlus => self.notepadpp = path,
            BuiltinEditor::Vim => self.vim = path,
            BuiltinEditor::Emacs => self.emacs = path,
            BuiltinEditor::Cursor => self.cursor = path,
            BuiltinEditor::Zed => self.zed = path,
        }
    }
}
