use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{cmd_config, cmd_custom, cmd_detect, cmd_list, cmd_open, ConfigAction, CustomAction};

#[derive(Parser)]
#[command(
    name = "edswitch",
    about = "Jump to the same file, line, and column in another editor"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a file or project in another editor
    Open {
        /// Built-in editor name (vscode, vim, …) or custom editor id
        #[arg(value_name = "EDITOR")]
        editor: String,

        /// Absolute path of the file to open
        #[arg(long)]
        file: Option<String>,

        /// Project root directory
        #[arg(long)]
        project: Option<String>,

        /// 1-based cursor line
        #[arg(long, default_value_t = 1)]
        line: u32,

        /// 1-based cursor column
        #[arg(long, default_value_t = 1)]
        column: u32,

        /// Print the resolved command instead of launching it
        #[arg(long)]
        dry_run: bool,
    },

    /// List built-in and custom editors
    List,

    /// Probe known install locations and fill in unconfigured editor paths
    Detect,

    /// Manage custom editor definitions
    Custom {
        #[command(subcommand)]
        action: CustomAction,
    },

    /// Manage edswitch configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() -> Result<()> {
    // Log level is controlled by EDSWITCH_LOG, e.g. EDSWITCH_LOG=debug.
    let filter = EnvFilter::try_from_env("EDSWITCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Open {
            editor,
            file,
            project,
            line,
            column,
            dry_run,
        } => cmd_open(&editor, file, project, line, column, dry_run)?,

        Commands::List => cmd_list()?,

        Commands::Detect => cmd_detect()?,

        Commands::Custom { action } => cmd_custom(action)?,

        Commands::Config { action } => cmd_config(action)?,
    }

    Ok(())
}
