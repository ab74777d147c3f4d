//! Contact info CLI commands

use std::collections::BTreeSet;

use clap::Subcommand;

use crate::error::{MotorlotError, MotorlotResult};
use crate::models::{CallTime, ContactPatch, PreferredContact};

use super::CliDraftManager;

/// Contact subcommands
#[derive(Subcommand)]
pub enum ContactCommands {
    /// Set one or more contact fields
    Set {
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        whatsapp: Option<String>,
        /// Whether WhatsApp uses the same number as phone
        #[arg(long)]
        whatsapp_same: Option<bool>,
        /// phone, whatsapp, or both
        #[arg(long)]
        preferred: Option<String>,
        /// Comma-separated call times (morning/afternoon/evening/anytime)
        #[arg(long)]
        call_times: Option<String>,
        /// Free-text description (clamped to 1000 characters)
        #[arg(long)]
        description: Option<String>,
    },
    /// Clear all contact info
    Clear,
}

/// Handle a contact command
pub fn handle_contact_command(
    manager: &mut CliDraftManager,
    cmd: ContactCommands,
) -> MotorlotResult<()> {
    match cmd {
        ContactCommands::Set {
            phone,
            whatsapp,
            whatsapp_same,
            preferred,
            call_times,
            description,
        } => {
            let preferred_contact = match preferred {
                None => None,
                Some(raw) => Some(PreferredContact::parse(&raw).ok_or_else(|| {
                    MotorlotError::Validation(format!("Invalid preferred contact: '{}'", raw))
                })?),
            };

            let call_times = call_times.map(|list| {
                list.split(',')
                    .filter_map(|t| CallTime::parse(t.trim()))
                    .collect::<BTreeSet<CallTime>>()
            });

            let patch = ContactPatch {
                phone,
                whatsapp,
                whatsapp_same_as_phone: whatsapp_same,
                preferred_contact,
                call_times,
                description,
            };

            if patch.is_empty() {
                println!("No changes specified. Use flags like --phone or --description.");
                return Ok(());
            }

            manager.set_contact(Some(patch));
            println!("Contact info updated.");
        }

        ContactCommands::Clear => {
            manager.set_contact(None);
            println!("Contact info cleared.");
        }
    }

    Ok(())
}
