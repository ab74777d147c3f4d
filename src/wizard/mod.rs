//! The interactive sell wizard
//!
//! Walks the seller through the five screens: location, media, car details,
//! contact info, and review/publish. Every answer is applied to the draft
//! manager immediately, so quitting mid-way never loses more than the
//! current step.

pub mod steps;

use std::io::{self, Write};

use crate::api::ListingsClient;
use crate::config::Settings;
use crate::display::{format_draft_summary, format_media_list};
use crate::error::{MotorlotError, MotorlotResult};
use crate::models::ListingId;
use crate::services::{DraftManager, MediaUploader, PreviewProvider, PublishService};
use crate::storage::DraftStore;

use steps::{contact::ContactStep, details::DetailsStep, location::LocationStep, media::MediaStep};

/// Result of running the sell wizard
pub struct WizardResult {
    /// Whether the wizard ran to the review screen
    pub completed: bool,
    /// Set when the seller published at the end
    pub published: Option<ListingId>,
}

/// The sell wizard
pub struct SellWizard<'a> {
    settings: &'a Settings,
}

impl<'a> SellWizard<'a> {
    /// Create a new sell wizard
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Run the interactive wizard
    pub fn run<S, P>(
        &self,
        manager: &mut DraftManager<S, P>,
        uploader: &dyn MediaUploader,
        client: Option<&ListingsClient>,
    ) -> MotorlotResult<WizardResult>
    where
        S: DraftStore,
        P: PreviewProvider,
    {
        println!();
        println!("===========================================");
        println!("  Sell your car");
        println!("===========================================");
        println!();
        println!("Five quick steps. Your answers are saved as a draft after");
        println!("every step, so you can quit and pick up where you left off.");
        println!();

        let confirm = prompt_string("Ready to begin? (yes/no) [yes]: ")?;
        if !confirm.is_empty() && confirm.to_lowercase() != "yes" && confirm.to_lowercase() != "y" {
            println!("Wizard cancelled. Your draft is unchanged.");
            return Ok(WizardResult {
                completed: false,
                published: None,
            });
        }

        // Step 1: location
        if let Some(location) = LocationStep::run(&self.settings.default_city)? {
            manager.set_location(Some(location));
        }

        // Step 2: media
        let files = MediaStep::run()?;
        if !files.is_empty() {
            manager.add_media(files);
        }

        if !manager.state().media.is_empty() {
            println!();
            print!("{}", format_media_list(&manager.state().media));
            println!();

            let cover = prompt_string("Cover item # [0]: ")?;
            if let Ok(index) = cover.parse::<usize>() {
                if let Some(item) = manager.state().media.get(index) {
                    let id = item.id;
                    manager.set_cover(id);
                }
            }

            let upload = prompt_string("Upload media now? (yes/no) [yes]: ")?;
            if upload.is_empty() || upload.to_lowercase() == "yes" || upload.to_lowercase() == "y" {
                match uploader.upload(&manager.state().media) {
                    Ok(urls) => {
                        println!("Uploaded {} file(s).", urls.len());
                        manager.set_uploaded_media_urls(urls);
                    }
                    Err(e) => {
                        println!("Upload failed ({}). You can retry with 'motorlot media upload'.", e);
                    }
                }
            }
        }

        // Step 3: car details
        let details = DetailsStep::run()?;
        if !details.is_empty() {
            manager.set_car_details(Some(details));
        }

        // Step 4: contact info
        let contact = ContactStep::run()?;
        if !contact.is_empty() {
            manager.set_contact(Some(contact));
        }

        // Step 5: review & publish
        println!();
        print!("{}", format_draft_summary(manager.state(), &self.settings.currency));
        println!();

        let publish = prompt_string("Publish now? (yes/no) [no]: ")?;
        if publish.to_lowercase() == "yes" || publish.to_lowercase() == "y" {
            let client = client.ok_or_else(|| {
                MotorlotError::Config(
                    "No listings backend configured. Set api_base_url in config.json.".into(),
                )
            })?;

            let id = PublishService::new(client).publish(manager)?;
            println!();
            println!("Published! Listing ID: {}", id);
            println!("Your draft has been cleared.");

            return Ok(WizardResult {
                completed: true,
                published: Some(id),
            });
        }

        println!();
        println!("Draft saved. Publish later with 'motorlot publish'.");

        Ok(WizardResult {
            completed: true,
            published: None,
        })
    }
}

/// Prompt for a string input
pub(crate) fn prompt_string(prompt: &str) -> MotorlotResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
