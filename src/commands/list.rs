use anyhow::Result;
use edswitch::{config::Config, BuiltinEditor};

pub fn cmd_list() -> Result<()> {
    let config = Config::load()?;

    println!("Built-in editors:");
    for kind in BuiltinEditor::ALL {
        let path = config.editors.path(kind);
        if path.is_empty() {
            println!("  {:<10} (not configured)", kind.name());
        } else {
            println!("  {:<10} {path}", kind.name());
        }
    }

    if config.custom.all().is_empty() {
        return Ok(());
    }

    println!("\nCustom editors:");
    for editor in config.custom.all() {
        let state = if editor.enabled { "" } else { " (disabled)" };
        println!("  {:<10} {}{state}", editor.id, editor.label());
    }
    Ok(())
}
