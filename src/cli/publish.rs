//! Publish and edit CLI commands

use crate::api::ListingsClient;
use crate::config::Settings;
use crate::error::{MotorlotError, MotorlotResult};
use crate::models::ListingId;
use crate::services::PublishService;

use super::CliDraftManager;

/// Build the listings client from settings
pub fn client_from_settings(settings: &Settings) -> MotorlotResult<ListingsClient> {
    let base_url = settings.api_base_url.as_deref().ok_or_else(|| {
        MotorlotError::Config(
            "No listings backend configured. Set api_base_url in config.json.".into(),
        )
    })?;
    ListingsClient::new(base_url)
}

/// Publish the current draft
pub fn handle_publish_command(
    manager: &mut CliDraftManager,
    settings: &Settings,
) -> MotorlotResult<()> {
    let client = client_from_settings(settings)?;
    let id = PublishService::new(&client).publish(manager)?;

    println!("Published! Listing ID: {}", id);
    println!("Your draft has been cleared.");
    Ok(())
}

/// Fetch an existing listing into the draft for editing
pub fn handle_edit_command(
    manager: &mut CliDraftManager,
    settings: &Settings,
    listing: &str,
) -> MotorlotResult<()> {
    let id: ListingId = listing
        .parse()
        .map_err(|_| MotorlotError::Validation(format!("Invalid listing ID: '{}'", listing)))?;

    let client = client_from_settings(settings)?;
    let existing = client.get_listing(id)?;

    let image_count = existing.images.len();
    manager.load_for_edit(existing);
    manager.set_edit_listing_id(Some(id));

    println!("Loaded listing {} into the draft.", id);
    if image_count > 0 {
        println!(
            "Note: the listing's {} existing photo(s) cannot be edited here;",
            image_count
        );
        println!("attach replacements with 'motorlot media add' if needed.");
    }
    Ok(())
}
