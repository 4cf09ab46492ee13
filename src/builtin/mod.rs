mod detect;

#[cfg(test)]
mod tests;

pub use detect::{detect_path, detect_paths};

use crate::context::EditorContext;

/// The editors edswitch can drive without a user-supplied template.
///
/// The set is closed: each kind carries a fixed argument shape matching that
/// editor's CLI conventions, selected in [`build_command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinEditor {
    Kiro,
    VsCode,
    Sublime,
    Atom,
    NotepadPlusPlus,
    Vim,
    Emacs,
    Cursor,
    Zed,
}

impl BuiltinEditor {
    /// Every built-in kind, in listing order.
    pub const ALL: [Self; 9] = [
        Self::Kiro,
        Self::VsCode,
        Self::Sublime,
        Self::Atom,
        Self::NotepadPlusPlus,
        Self::Vim,
        Self::Emacs,
        Self::Cursor,
        Self::Zed,
    ];

    /// Stable lowercase name used as the config key and CLI argument.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Kiro => "kiro",
            Self::VsCode => "vscode",
            Self::Sublime => "sublime",
            Self::Atom => "atom",
            Self::NotepadPlusPlus => "notepadpp",
            Self::Vim => "vim",
            Self::Emacs => "emacs",
            Self::Cursor => "cursor",
            Self::Zed => "zed",
        }
    }

    /// Name shown in listings and messages.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Kiro => "Kiro",
            Self::VsCode => "VS Code",
            Self::Sublime => "Sublime Text",
            Self::Atom => "Atom",
            Self::NotepadPlusPlus => "Notepad++",
            Self::Vim => "Vim",
            Self::Emacs => "Emacs",
            Self::Cursor => "Cursor",
            Self::Zed => "Zed",
        }
    }

    /// Case-insensitive lookup by config/CLI name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

/// Arrange `executable` plus the context into the argument vector this
/// editor's CLI expects.
///
/// Never fails: an absent file or project drops the matching tokens instead
/// of erroring. Callers must not pass an empty `executable`; an unconfigured
/// kind is refused at the switch layer before this is reached.
#[must_use]
pub fn build_command(kind: BuiltinEditor, executable: &str, ctx: &EditorContext) -> Vec<String> {
    match kind {
        BuiltinEditor::Kiro => {
            let mut cmd = vec![executable.to_string()];
            if let Some(project) = &ctx.project_path {
                cmd.push(project.clone());
            }
            if let Some(file) = &ctx.file_path {
                cmd.push(file.clone());
                cmd.push("--line".to_string());
                cmd.push(ctx.line.to_string());
                cmd.push("--column".to_string());
                cmd.push(ctx.column.to_string());
            }
            cmd
        }
        BuiltinEditor::VsCode | BuiltinEditor::Cursor => {
            let mut cmd = vec![executable.to_string()];
            if let Some(project) = &ctx.project_path {
                cmd.push(project.clone());
            }
            if let Some(file) = &ctx.file_path {
                cmd.push("--goto".to_string());
                cmd.push(format!("{file}:{}:{}", ctx.line, ctx.column));
            }
            cmd
        }
        BuiltinEditor::Sublime | BuiltinEditor::Atom | BuiltinEditor::Zed => {
            let mut cmd = vec![executable.to_string()];
            if let Some(project) = &ctx.project_path {
                cmd.push(project.clone());
            }
            if let Some(file) = &ctx.file_path {
                cmd.push(format!("{file}:{}:{}", ctx.line, ctx.column));
            }
            cmd
        }
        BuiltinEditor::NotepadPlusPlus => {
            let mut cmd = vec![executable.to_string()];
            if let Some(file) = &ctx.file_path {
                cmd.push(format!("-n{}", ctx.line));
                cmd.push(format!("-c{}", ctx.column));
                cmd.push(file.clone());
            }
            cmd
        }
        BuiltinEditor::Emacs => {
            let mut cmd = vec![executable.to_string()];
            if let Some(file) = &ctx.file_path {
                cmd.push(format!("+{}:{}", ctx.line, ctx.column));
                cmd.push(file.clone());
            }
            cmd
        }
        BuiltinEditor::Vim => {
            // vim runs inside the OS terminal; the configured path only
            // gates whether the kind counts as installed.
            let mut cmd = vec![
                "open".to_string(),
                "-a".to_string(),
                "Terminal".to_string(),
            ];
            if let Some(file) = &ctx.file_path {
                cmd.push("--args".to_string());
                cmd.push("vim".to_string());
                cmd.push(format!("+{}", ctx.line));
                cmd.push(file.clone());
            } else if let Some(project) = &ctx.project_path {
                cmd.push("--args".to_string());
                cmd.push("vim".to_string());
                cmd.push(project.clone());
            }
            cmd
        }
    }
}
