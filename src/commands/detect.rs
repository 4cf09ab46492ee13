use anyhow::Result;
use edswitch::{builtin, config::Config};

pub fn cmd_detect() -> Result<()> {
    let mut config = Config::load()?;
    let found = builtin::detect_paths(&mut config.editors);

    if found.is_empty() {
        eprintln!("No new editors found.");
        return Ok(());
    }

    for (kind, path) in &found {
        eprintln!("Found {}: {path}", kind.display_name());
    }
    config.save()?;
    eprintln!(
        "Saved {} editor path(s) to {}",
        found.len(),
        Config::path()?.display()
    );
    Ok(())
}
