use anyhow::Result;
use clap::{Parser, Subcommand};

use motorlot::cli::{
    handle_contact_command, handle_details_command, handle_draft_command, handle_edit_command,
    handle_location_command, handle_media_command, handle_publish_command, open_manager,
    open_uploader,
};
use motorlot::config::{MotorlotPaths, Settings};
use motorlot::wizard::SellWizard;

#[derive(Parser)]
#[command(
    name = "motorlot",
    version,
    about = "Terminal-based listing wizard for selling your car",
    long_about = "motorlot walks you through drafting a car listing - location, \
                  photos, car details, and contact info - keeps the draft saved \
                  locally between sessions, and publishes it to the marketplace \
                  when you are ready."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive sell wizard
    Wizard,

    /// Location commands
    #[command(subcommand)]
    Location(motorlot::cli::LocationCommands),

    /// Media commands
    #[command(subcommand)]
    Media(motorlot::cli::MediaCommands),

    /// Car detail commands
    #[command(subcommand)]
    Details(motorlot::cli::DetailsCommands),

    /// Contact info commands
    #[command(subcommand)]
    Contact(motorlot::cli::ContactCommands),

    /// Draft commands
    #[command(subcommand)]
    Draft(motorlot::cli::DraftCommands),

    /// Publish the current draft to the marketplace
    Publish,

    /// Load an existing listing into the draft for editing
    Edit {
        /// Listing ID
        listing: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let paths = MotorlotPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Wizard) | None => {
            let mut manager = open_manager(&paths, &settings)?;
            let uploader = open_uploader(&paths);
            let client = match &settings.api_base_url {
                Some(_) => Some(motorlot::cli::publish::client_from_settings(&settings)?),
                None => None,
            };

            SellWizard::new(&settings).run(&mut manager, &uploader, client.as_ref())?;
        }

        Some(Commands::Location(cmd)) => {
            let mut manager = open_manager(&paths, &settings)?;
            handle_location_command(&mut manager, cmd)?;
        }

        Some(Commands::Media(cmd)) => {
            let mut manager = open_manager(&paths, &settings)?;
            let uploader = open_uploader(&paths);
            handle_media_command(&mut manager, &uploader, cmd)?;
        }

        Some(Commands::Details(cmd)) => {
            let mut manager = open_manager(&paths, &settings)?;
            handle_details_command(&mut manager, cmd)?;
        }

        Some(Commands::Contact(cmd)) => {
            let mut manager = open_manager(&paths, &settings)?;
            handle_contact_command(&mut manager, cmd)?;
        }

        Some(Commands::Draft(cmd)) => {
            let mut manager = open_manager(&paths, &settings)?;
            handle_draft_command(&mut manager, &settings, cmd)?;
        }

        Some(Commands::Publish) => {
            let mut manager = open_manager(&paths, &settings)?;
            handle_publish_command(&mut manager, &settings)?;
        }

        Some(Commands::Edit { listing }) => {
            let mut manager = open_manager(&paths, &settings)?;
            handle_edit_command(&mut manager, &settings, &listing)?;
        }

        Some(Commands::Config) => {
            println!("Base directory: {}", paths.base_dir().display());
            println!("Draft file:     {}", paths.draft_file(&settings.draft_key).display());
            println!("Uploads:        {}", paths.uploads_dir().display());
            println!(
                "Backend:        {}",
                settings.api_base_url.as_deref().unwrap_or("(not configured)")
            );
            println!("Currency:       {}", settings.currency);
        }
    }

    Ok(())
}
