use std::path::Path;

use super::BuiltinEditor;
use crate::config::BuiltinPaths;

/// Fill in every unconfigured built-in path that can be found on this
/// machine. Already-configured entries are left alone. Returns what was
/// newly detected.
pub fn detect_paths(paths: &mut BuiltinPaths) -> Vec<(BuiltinEditor, String)> {
    let mut found = Vec::new();
    for kind in BuiltinEditor::ALL {
        if !paths.path(kind).is_empty() {
            continue;
        }
        if let Some(path) = detect_path(kind) {
            paths.set_path(kind, path.clone());
            found.push((kind, path));
        }
    }
    found
}

/// Probe the fixed install locations for `kind`, falling back to a PATH
/// lookup of its bare binary name.
#[must_use]
pub fn detect_path(kind: BuiltinEditor) -> Option<String> {
    if let Some(hit) = first_existing(kind, |p| Path::new(p).exists()) {
        return Some(hit);
    }
    which::which(binary_name(kind))
        .ok()
        .and_then(|p| p.to_str().map(str::to_string))
}

/// First entry of `kind`'s fixed candidate list accepted by `exists`.
pub(super) fn first_existing(
    kind: BuiltinEditor,
    exists: impl Fn(&str) -> bool,
) -> Option<String> {
    candidates(kind)
        .iter()
        .find(|p| exists(p))
        .map(|p| (*p).to_string())
}

/// Binary name probed on PATH when no fixed candidate exists.
fn binary_name(kind: BuiltinEditor) -> &'static str {
    match kind {
        BuiltinEditor::Kiro => "kiro",
        BuiltinEditor::VsCode => "code",
        BuiltinEditor::Sublime => "subl",
        BuiltinEditor::Atom => "atom",
        BuiltinEditor::NotepadPlusPlus => "notepad++",
        BuiltinEditor::Vim => "vim",
        BuiltinEditor::Emacs => "emacs",
        BuiltinEditor::Cursor => "cursor",
        BuiltinEditor::Zed => "zed",
    }
}

/// Well-known install locations, checked in order.
fn candidates(kind: BuiltinEditor) -> &'static [&'static str] {
    match kind {
        BuiltinEditor::Kiro => &[
            "/Applications/Kiro.app/Contents/MacOS/Kiro",
            "/usr/local/bin/kiro",
            "/opt/kiro/bin/kiro",
            "C:\\Program Files\\Kiro\\Kiro.exe",
            "C:\\Program Files (x86)\\Kiro\\Kiro.exe",
        ],
        BuiltinEditor::VsCode => &[
            "/Applications/Visual Studio Code.app/Contents/Resources/app/bin/code",
            "/usr/local/bin/code",
            "/opt/visual-studio-code/bin/code",
            "C:\\Program Files\\Microsoft VS Code\\bin\\code.cmd",
            "C:\\Program Files (x86)\\Microsoft VS Code\\bin\\code.cmd",
        ],
        BuiltinEditor::Sublime => &[
            "/Applications/Sublime Text.app/Contents/SharedSupport/bin/subl",
            "/usr/local/bin/subl",
            "/opt/sublime_text/sublime_text",
            "C:\\Program Files\\Sublime Text\\subl.exe",
            "C:\\Program Files (x86)\\Sublime Text\\subl.exe",
        ],
        BuiltinEditor::Atom => &[
            "/Applications/Atom.app/Contents/Resources/app/atom.sh",
            "/usr/local/bin/atom",
            "/opt/atom/atom",
            "C:\\Program Files\\Atom\\atom.exe",
            "C:\\Program Files (x86)\\Atom\\atom.exe",
        ],
        BuiltinEditor::NotepadPlusPlus => &[
            "C:\\Program Files\\Notepad++\\notepad++.exe",
            "C:\\Program Files (x86)\\Notepad++\\notepad++.exe",
        ],
        BuiltinEditor::Vim => &[
            "/usr/bin/vim",
            "/usr/local/bin/vim",
            "/opt/homebrew/bin/vim",
            "C:\\Program Files\\Vim\\vim90\\vim.exe",
        ],
        BuiltinEditor::Emacs => &[
            "/Applications/Emacs.app/Contents/MacOS/Emacs",
            "/usr/local/bin/emacs",
            "/opt/homebrew/bin/emacs",
            "C:\\Program Files\\Emacs\\bin\\emacs.exe",
        ],
        BuiltinEditor::Cursor => &[
            "/Applications/Cursor.app/Contents/Resources/app/bin/cursor",
            "/usr/local/bin/cursor",
            "/opt/cursor/cursor",
            "C:\\Program Files\\Cursor\\Cursor.exe",
        ],
        BuiltinEditor::Zed => &[
            "/Applications/Zed.app/Contents/MacOS/zed",
            "/usr/local/bin/zed",
            "/opt/zed/zed",
            "C:\\Program Files\\Zed\\zed.exe",
        ],
    }
}
