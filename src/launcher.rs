use anyhow::{bail, Context, Result};
use std::process::{Command, Stdio};
use tracing::info;

/// PATH with the usual user-binary directories prepended, so spawned editors
/// resolve even when this process was started outside a login shell.
#[must_use]
pub fn augmented_path() -> String {
    let current = std::env::var("PATH").unwrap_or_default();
    let extras = ["/usr/local/bin", "/opt/homebrew/bin", "/opt/homebrew/sbin"];
    let mut parts: Vec<&str> = extras.iter().copied().collect();
    for p in current.split(':').filter(|s| !s.is_empty()) {
        if !parts.contains(&p) {
            parts.push(p);
        }
    }
    parts.join(":")
}

/// Spawn `argv` detached. The first element is the executable; the process
/// is left running on its own and its output is discarded.
pub fn launch(argv: &[String]) -> Result<()> {
    let Some((program, args)) = argv.split_first() else {
        bail!("Empty command");
    };
    Command::new(program)
        .args(args)
        .env("PATH", augmented_path())
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("Failed to spawn {program}"))?;
    info!(command = %argv.join(" "), "launched editor");
    Ok(())
}
