use super::*;

fn editor(executable: &str, template: &str) -> CustomEditor {
    CustomEditor {
        id: "test".into(),
        name: "Test".into(),
        executable: executable.into(),
        template: template.into(),
        ..CustomEditor::default()
    }
}

fn ctx(file: Option<&str>, project: Option<&str>, line: u32, column: u32) -> EditorContext {
    EditorContext::new(
        file.map(str::to_string),
        project.map(str::to_string),
        line,
        column,
    )
}

#[test]
fn test_full_context_resolution() {
    let argv = resolve(
        &editor("/bin/ed", "{EXECUTABLE} {PROJECT} --goto {FILE}:{LINE}:{COLUMN}"),
        &ctx(Some("/proj/a.txt"), Some("/proj"), 10, 3),
    );
    assert_eq!(argv, ["/bin/ed", "/proj", "--goto", "/proj/a.txt:10:3"]);
}

#[test]
fn test_absent_placeholders_vanish() {
    let argv = resolve(
        &editor("/bin/ed", "{EXECUTABLE} {PROJECT} {FILE}"),
        &ctx(None, None, 1, 1),
    );
    assert_eq!(argv, ["/bin/ed"]);
}

#[test]
fn test_absent_file_drops_line_and_column() {
    let argv = resolve(
        &editor("/bin/ed", "{EXECUTABLE} {FILE} {LINE} {COLUMN}"),
        &ctx(None, Some("/proj"), 7, 9),
    );
    assert_eq!(argv, ["/bin/ed"]);
}

#[test]
fn test_no_literal_placeholders_survive_absence() {
    let argv = resolve(
        &editor("/bin/ed", "{EXECUTABLE} {PROJECT} {FILE} {LINE} {COLUMN}"),
        &ctx(None, None, 1, 1),
    );
    for token in &argv {
        assert!(!token.contains("{FILE}"));
        assert!(!token.contains("{LINE}"));
        assert!(!token.contains("{COLUMN}"));
        assert!(!token.is_empty());
    }
}

#[test]
fn test_repeated_placeholder_substitutes_every_occurrence() {
    let argv = resolve(
        &editor("/bin/ed", "{EXECUTABLE} {FILE} {FILE}"),
        &ctx(Some("/a.txt"), None, 1, 1),
    );
    assert_eq!(argv, ["/bin/ed", "/a.txt", "/a.txt"]);
}

#[test]
fn test_substitution_is_not_recursive() {
    // A placeholder-shaped value inserted for {EXECUTABLE} must not be
    // expanded in turn.
    let argv = resolve(
        &editor("/weird/{FILE}/bin", "{EXECUTABLE}"),
        &ctx(Some("/a.txt"), None, 1, 1),
    );
    assert_eq!(argv, ["/weird/{FILE}/bin"]);
}

#[test]
fn test_unknown_placeholder_stays_literal() {
    let argv = resolve(
        &editor("/bin/ed", "{EXECUTABLE} {FOO}"),
        &ctx(None, None, 1, 1),
    );
    assert_eq!(argv, ["/bin/ed", "{FOO}"]);
}

#[test]
fn test_path_with_space_splits() {
    // Documented limitation: no quoting support in templates.
    let argv = resolve(
        &editor("/bin/ed", "{EXECUTABLE} {PROJECT}"),
        &ctx(None, Some("/My Projects/app"), 1, 1),
    );
    assert_eq!(argv, ["/bin/ed", "/My", "Projects/app"]);
}

#[test]
fn test_whitespace_runs_collapse() {
    let argv = resolve(
        &editor("/bin/ed", "  {EXECUTABLE}   --wait\t{FILE}  "),
        &ctx(Some("/a.txt"), None, 1, 1),
    );
    assert_eq!(argv, ["/bin/ed", "--wait", "/a.txt"]);
}

#[test]
fn test_resolution_is_idempotent() {
    let ed = editor("/bin/ed", "{EXECUTABLE} {PROJECT} --goto {FILE}:{LINE}:{COLUMN}");
    let context = ctx(Some("/proj/a.txt"), Some("/proj"), 10, 3);
    assert_eq!(resolve(&ed, &context), resolve(&ed, &context));
}

#[test]
fn test_clamped_context_resolves_to_one() {
    let argv = resolve(
        &editor("/bin/ed", "{EXECUTABLE} {FILE}:{LINE}:{COLUMN}"),
        &ctx(Some("/a.txt"), None, 0, 0),
    );
    assert_eq!(argv, ["/bin/ed", "/a.txt:1:1"]);
}
