//! Draft CLI commands
//!
//! Show, export, and clear the durable draft.

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_draft_summary;
use crate::error::{MotorlotError, MotorlotResult};
use crate::export::{export_draft, ExportFormat};

use super::CliDraftManager;

/// Draft subcommands
#[derive(Subcommand)]
pub enum DraftCommands {
    /// Show the current draft
    Show,
    /// Export the draft record
    Export {
        /// Output format (json or yaml)
        #[arg(short, long, default_value = "json")]
        format: String,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Discard the draft and erase its durable record
    Clear,
}

/// Handle a draft command
pub fn handle_draft_command(
    manager: &mut CliDraftManager,
    settings: &Settings,
    cmd: DraftCommands,
) -> MotorlotResult<()> {
    match cmd {
        DraftCommands::Show => {
            print!("{}", format_draft_summary(manager.state(), &settings.currency));
        }

        DraftCommands::Export { format, output } => {
            let format = ExportFormat::parse(&format).ok_or_else(|| {
                MotorlotError::Validation(format!(
                    "Invalid export format: '{}'. Use json or yaml.",
                    format
                ))
            })?;

            let record = manager.record();
            match output {
                Some(path) => {
                    let mut file = std::fs::File::create(&path).map_err(|e| {
                        MotorlotError::Export(format!("Failed to create {}: {}", path.display(), e))
                    })?;
                    export_draft(&record, &mut file, format)?;
                    println!("Exported draft to {}.", path.display());
                }
                None => {
                    let mut stdout = std::io::stdout();
                    export_draft(&record, &mut stdout, format)?;
                }
            }
        }

        DraftCommands::Clear => {
            manager.clear_draft();
            println!("Draft cleared.");
        }
    }

    Ok(())
}
