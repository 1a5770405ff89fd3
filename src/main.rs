use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use ert_manager::commands::{PanelOptions, ShowOptions, cmd_panel, cmd_show};
use ert_manager::tui::panel::Tab;

#[derive(Parser)]
#[command(name = "ert-manager")]
#[command(about = "Emergency Response Team manager panel")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive panel
    Panel {
        /// Snapshot JSON file to watch (default: snapshot_path from config)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// File emitted actions are appended to, one JSON object per line
        #[arg(short, long)]
        actions: Option<PathBuf>,

        /// Config file (default: $ERT_MANAGER_CONFIG, then the user config dir)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Tab selected on start: send, read or deny
        #[arg(short, long, default_value = "send", value_parser = parse_tab)]
        tab: Tab,
    },

    /// Render the panel for a snapshot once and exit
    Show {
        /// Snapshot JSON file
        #[arg(short, long)]
        snapshot: PathBuf,

        /// Tab to render: send, read or deny
        #[arg(short, long, default_value = "send", value_parser = parse_tab)]
        tab: Tab,

        /// Config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the parsed snapshot as JSON instead
        #[arg(long)]
        json: bool,
    },
}

fn parse_tab(s: &str) -> Result<Tab, String> {
    s.parse().map_err(|e: ert_manager::ErtError| e.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Panel {
            snapshot,
            actions,
            config,
            tab,
        } => {
            cmd_panel(PanelOptions {
                snapshot,
                actions,
                config,
                tab,
            })
            .await
        }
        Commands::Show {
            snapshot,
            tab,
            config,
            json,
        } => cmd_show(ShowOptions {
            snapshot,
            tab,
            config,
            output_json: json,
        }),
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
