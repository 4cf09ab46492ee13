use anyhow::{bail, Result};
use clap::Subcommand;
use edswitch::{config::Config, custom::CustomEditor, validate};

#[derive(Subcommand)]
pub enum CustomAction {
    /// Add a custom editor definition
    Add {
        /// Unique id (letters, numbers, underscores)
        id: String,

        /// Human-readable name shown in listings
        #[arg(long)]
        name: String,

        /// Path to the editor executable, substituted for {EXECUTABLE}
        #[arg(long)]
        executable: String,

        /// Command template, e.g. "{EXECUTABLE} {PROJECT} --goto {FILE}:{LINE}:{COLUMN}"
        #[arg(long)]
        template: String,

        /// Emoji shown next to the name
        #[arg(long, default_value = "")]
        icon: String,

        /// Keyboard shortcut hint, e.g. "ctrl alt W"
        #[arg(long, default_value = "")]
        shortcut: String,

        /// Create the editor disabled
        #[arg(long)]
        disabled: bool,

        /// Offer in a host status-bar menu (true/false)
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        status_bar: bool,

        /// Offer in a host context menu (true/false)
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        context_menu: bool,

        /// Offer in a host tools menu (true/false)
        #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
        tools_menu: bool,
    },

    /// Update fields of an existing custom editor
    Update {
        /// Id of the editor to update
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        executable: Option<String>,

        #[arg(long)]
        template: Option<String>,

        #[arg(long)]
        icon: Option<String>,

        #[arg(long)]
        shortcut: Option<String>,

        /// Enable or disable the editor (true/false)
        #[arg(long)]
        enabled: Option<bool>,

        #[arg(long)]
        status_bar: Option<bool>,

        #[arg(long)]
        context_menu: Option<bool>,

        #[arg(long)]
        tools_menu: Option<bool>,
    },

    /// Remove a custom editor
    Remove {
        /// Id of the editor to remove
        id: String,
    },

    /// Show a custom editor definition
    Show {
        /// Id of the editor to show
        id: String,
    },
}

pub fn cmd_custom(action: CustomAction) -> Result<()> {
    match action {
        CustomAction::Add {
            id,
            name,
            executable,
            template,
            icon,
            shortcut,
            disabled,
            status_bar,
            context_menu,
            tools_menu,
        } => {
            let mut config = Config::load()?;

            let editor = CustomEditor {
                id: id.clone(),
                name,
                executable,
                template,
                icon,
                shortcut,
                enabled: !disabled,
                show_in_status_bar: status_bar,
                show_in_context_menu: context_menu,
                show_in_tools_menu: tools_menu,
            };
            {
                let ids = config.custom.ids();
                let outcome = validate::validate_definition(&editor, true, &ids);
                if !outcome.valid {
                    bail!(outcome.message);
                }
            }
            if !config.custom.add(editor) {
                bail!("Could not add custom editor {id}");
            }
            config.save()?;
            eprintln!("Added custom editor {id}");
        }

        CustomAction::Update {
            id,
            name,
            executable,
            template,
            icon,
            shortcut,
            enabled,
            status_bar,
            context_menu,
            tools_menu,
        } => {
            let mut config = Config::load()?;
            let Some(existing) = config.custom.get(&id) else {
                bail!("No custom editor with id {id}");
            };

            let mut editor = existing.clone();
            if let Some(name) = name {
                editor.name = name;
            }
            if let Some(executable) = executable {
                editor.executable = executable;
            }
            if let Some(template) = template {
                editor.template = template;
            }
            if let Some(icon) = icon {
                editor.icon = icon;
            }
            if let Some(shortcut) = shortcut {
                editor.shortcut = shortcut;
            }
            if let Some(enabled) = enabled {
                editor.enabled = enabled;
            }
            if let Some(status_bar) = status_bar {
                editor.show_in_status_bar = status_bar;
            }
            if let Some(context_menu) = context_menu {
                editor.show_in_context_menu = context_menu;
            }
            if let Some(tools_menu) = tools_menu {
                editor.show_in_tools_menu = tools_menu;
            }

            {
                let ids = config.custom.ids();
                let outcome = validate::validate_definition(&editor, false, &ids);
                if !outcome.valid {
                    bail!(outcome.message);
                }
            }
            if !config.custom.update(&id, editor) {
                bail!("Could not update custom editor {id}");
            }
            config.save()?;
            eprintln!("Updated custom editor {id}");
        }

        CustomAction::Remove { id } => {
            let mut config = Config::load()?;
            if config.custom.remove(&id) {
                config.save()?;
                eprintln!("Removed custom editor {id}");
            } else {
                eprintln!("No custom editor with id {id}");
            }
        }

        CustomAction::Show { id } => {
            let config = Config::load()?;
            let Some(editor) = config.custom.get(&id) else {
                bail!("No custom editor with id {id}");
            };
            let pretty = toml::to_string_pretty(editor)?;
            print!("{pretty}");
        }
    }
    Ok(())
}
