//! Contact step
//!
//! Collects how buyers should reach the seller, plus the free-text
//! description.

use std::collections::BTreeSet;

use crate::error::MotorlotResult;
use crate::models::{CallTime, ContactPatch, PreferredContact, MAX_DESCRIPTION_CHARS};

use super::super::prompt_string;

/// Contact step
pub struct ContactStep;

impl ContactStep {
    /// Run the contact step. Empty answers leave fields untouched.
    pub fn run() -> MotorlotResult<ContactPatch> {
        println!();
        println!("Step 4: Contact Info");
        println!("====================");
        println!();

        let mut patch = ContactPatch::default();

        let phone = prompt_string("Phone number: ")?;
        if !phone.is_empty() {
            patch.phone = Some(phone);
        }

        let same = prompt_string("Is your WhatsApp the same number? (yes/no) [yes]: ")?;
        match same.to_lowercase().as_str() {
            "" | "yes" | "y" => patch.whatsapp_same_as_phone = Some(true),
            "no" | "n" => {
                patch.whatsapp_same_as_phone = Some(false);
                let whatsapp = prompt_string("WhatsApp number: ")?;
                if !whatsapp.is_empty() {
                    patch.whatsapp = Some(whatsapp);
                }
            }
            _ => {}
        }

        let preferred = prompt_string("Preferred contact (phone/whatsapp/both): ")?;
        if let Some(preferred) = PreferredContact::parse(&preferred) {
            patch.preferred_contact = Some(preferred);
        }

        let times = prompt_string("Best times to call (comma-separated: morning/afternoon/evening/anytime): ")?;
        if !times.is_empty() {
            let set: BTreeSet<CallTime> = times
                .split(',')
                .filter_map(|t| CallTime::parse(t.trim()))
                .collect();
            if !set.is_empty() {
                patch.call_times = Some(set);
            }
        }

        println!();
        println!("Describe the car for buyers (max {} characters).", MAX_DESCRIPTION_CHARS);
        let description = prompt_string("Description: ")?;
        if !description.is_empty() {
            patch.description = Some(description);
        }

        Ok(patch)
    }
}
