use super::*;

fn ctx(file: Option<&str>, project: Option<&str>, line: u32, column: u32) -> EditorContext {
    EditorContext::new(
        file.map(str::to_string),
        project.map(str::to_string),
        line,
        column,
    )
}

#[test]
fn test_vscode_goto_with_project_and_file() {
    let cmd = build_command(
        BuiltinEditor::VsCode,
        "/usr/local/bin/code",
        &ctx(Some("/p/f.go"), Some("/p"), 5, 2),
    );
    assert_eq!(cmd, ["/usr/local/bin/code", "/p", "--goto", "/p/f.go:5:2"]);
}

#[test]
fn test_vscode_goto_without_project() {
    let cmd = build_command(
        BuiltinEditor::VsCode,
        "/usr/local/bin/code",
        &ctx(Some("/p/f.go"), None, 5, 2),
    );
    assert_eq!(cmd, ["/usr/local/bin/code", "--goto", "/p/f.go:5:2"]);
}

#[test]
fn test_vscode_project_only() {
    let cmd = build_command(
        BuiltinEditor::VsCode,
        "/usr/local/bin/code",
        &ctx(None, Some("/p"), 1, 1),
    );
    assert_eq!(cmd, ["/usr/local/bin/code", "/p"]);
}

#[test]
fn test_cursor_shapes_like_vscode() {
    let cmd = build_command(
        BuiltinEditor::Cursor,
        "/usr/local/bin/cursor",
        &ctx(Some("/p/f.go"), Some("/p"), 5, 2),
    );
    assert_eq!(cmd, ["/usr/local/bin/cursor", "/p", "--goto", "/p/f.go:5:2"]);
}

#[test]
fn test_zed_positional_locator() {
    let cmd = build_command(
        BuiltinEditor::Zed,
        "/usr/local/bin/zed",
        &ctx(Some("/p/a.rs"), Some("/p"), 10, 3),
    );
    assert_eq!(cmd, ["/usr/local/bin/zed", "/p", "/p/a.rs:10:3"]);
}

#[test]
fn test_sublime_file_only() {
    let cmd = build_command(
        BuiltinEditor::Sublime,
        "/usr/local/bin/subl",
        &ctx(Some("/p/a.rs"), None, 10, 3),
    );
    assert_eq!(cmd, ["/usr/local/bin/subl", "/p/a.rs:10:3"]);
}

#[test]
fn test_kiro_line_column_flags() {
    let cmd = build_command(
        BuiltinEditor::Kiro,
        "/usr/local/bin/kiro",
        &ctx(Some("/p/a.rs"), Some("/p"), 10, 3),
    );
    assert_eq!(
        cmd,
        ["/usr/local/bin/kiro", "/p", "/p/a.rs", "--line", "10", "--column", "3"]
    );
}

#[test]
fn test_notepadpp_flag_pair() {
    let cmd = build_command(
        BuiltinEditor::NotepadPlusPlus,
        "C:\\Program Files\\Notepad++\\notepad++.exe",
        &ctx(Some("C:\\p\\a.txt"), Some("C:\\p"), 10, 3),
    );
    assert_eq!(
        cmd,
        ["C:\\Program Files\\Notepad++\\notepad++.exe", "-n10", "-c3", "C:\\p\\a.txt"]
    );
}

#[test]
fn test_notepadpp_without_file_is_bare_executable() {
    let cmd = build_command(
        BuiltinEditor::NotepadPlusPlus,
        "npp.exe",
        &ctx(None, Some("C:\\p"), 1, 1),
    );
    assert_eq!(cmd, ["npp.exe"]);
}

#[test]
fn test_emacs_prefix_position() {
    let cmd = build_command(
        BuiltinEditor::Emacs,
        "/usr/local/bin/emacs",
        &ctx(Some("/p/a.rs"), None, 10, 3),
    );
    assert_eq!(cmd, ["/usr/local/bin/emacs", "+10:3", "/p/a.rs"]);
}

#[test]
fn test_vim_terminal_wrapped_with_file() {
    let cmd = build_command(
        BuiltinEditor::Vim,
        "/usr/bin/vim",
        &ctx(Some("/p/a.rs"), Some("/p"), 10, 3),
    );
    assert_eq!(
        cmd,
        ["open", "-a", "Terminal", "--args", "vim", "+10", "/p/a.rs"]
    );
}

#[test]
fn test_vim_terminal_wrapped_project_only() {
    let cmd = build_command(BuiltinEditor::Vim, "/usr/bin/vim", &ctx(None, Some("/p"), 1, 1));
    assert_eq!(cmd, ["open", "-a", "Terminal", "--args", "vim", "/p"]);
}

#[test]
fn test_vim_terminal_wrapped_empty_context() {
    let cmd = build_command(BuiltinEditor::Vim, "/usr/bin/vim", &ctx(None, None, 1, 1));
    assert_eq!(cmd, ["open", "-a", "Terminal"]);
}

#[test]
fn test_build_command_is_idempotent() {
    let context = ctx(Some("/p/f.go"), Some("/p"), 5, 2);
    let first = build_command(BuiltinEditor::VsCode, "/bin/code", &context);
    let second = build_command(BuiltinEditor::VsCode, "/bin/code", &context);
    assert_eq!(first, second);
}

#[test]
fn test_from_name_round_trip() {
    for kind in BuiltinEditor::ALL {
        assert_eq!(BuiltinEditor::from_name(kind.name()), Some(kind));
    }
}

#[test]
fn test_from_name_case_insensitive() {
    assert_eq!(BuiltinEditor::from_name("VSCode"), Some(BuiltinEditor::VsCode));
    assert_eq!(BuiltinEditor::from_name("ZED"), Some(BuiltinEditor::Zed));
    assert_eq!(BuiltinEditor::from_name("helix"), None);
}

#[test]
fn test_first_existing_takes_first_match() {
    let hit = detect::first_existing(BuiltinEditor::Vim, |p| {
        p == "/usr/local/bin/vim" || p == "/opt/homebrew/bin/vim"
    });
    assert_eq!(hit.as_deref(), Some("/usr/local/bin/vim"));
}

#[test]
fn test_first_existing_none_when_nothing_matches() {
    assert_eq!(detect::first_existing(BuiltinEditor::Kiro, |_| false), None);
}

#[test]
fn test_detect_paths_leaves_configured_entries_alone() {
    let mut paths = crate::config::BuiltinPaths::default();
    for kind in BuiltinEditor::ALL {
        paths.set_path(kind, format!("/configured/{}", kind.name()));
    }
    let found = detect_paths(&mut paths);
    assert!(found.is_empty());
    for kind in BuiltinEditor::ALL {
        assert_eq!(paths.path(kind), format!("/configured/{}", kind.name()));
    }
}
