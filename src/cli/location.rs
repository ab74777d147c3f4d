//! Location CLI commands

use clap::Subcommand;

use crate::error::MotorlotResult;
use crate::models::Location;

use super::CliDraftManager;

/// Location subcommands
#[derive(Subcommand)]
pub enum LocationCommands {
    /// Set the listing location
    Set {
        /// City name
        city: String,
        /// Neighborhood or district
        #[arg(short, long, default_value = "")]
        neighborhood: String,
    },
    /// Clear the listing location
    Clear,
}

/// Handle a location command
pub fn handle_location_command(
    manager: &mut CliDraftManager,
    cmd: LocationCommands,
) -> MotorlotResult<()> {
    match cmd {
        LocationCommands::Set { city, neighborhood } => {
            let location = Location::new(city, neighborhood);
            println!("Location set to {}.", location);
            manager.set_location(Some(location));
        }

        LocationCommands::Clear => {
            manager.set_location(None);
            println!("Location cleared.");
        }
    }

    Ok(())
}
