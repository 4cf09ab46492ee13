use anyhow::Result;
use edswitch::{config::Config, context::EditorContext, switcher};

pub fn cmd_open(
    editor: &str,
    file: Option<String>,
    project: Option<String>,
    line: u32,
    column: u32,
    dry_run: bool,
) -> Result<()> {
    let config = Config::load()?;
    let ctx = EditorContext::new(file, project, line, column);

    if dry_run {
        let argv = switcher::resolve(editor, &config, &ctx)?;
        println!("{}", argv.join(" "));
        return Ok(());
    }

    switcher::switch(editor, &config, &ctx)
}
