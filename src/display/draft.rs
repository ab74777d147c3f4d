//! Draft display formatting
//!
//! Formats the current wizard state as a review screen.

use crate::services::WizardState;

/// Format the draft as a multi-section summary
pub fn format_draft_summary(state: &WizardState, currency: &str) -> String {
    let mut output = String::new();

    output.push_str("Listing draft\n");
    output.push_str("=============\n\n");

    match &state.location {
        Some(location) => output.push_str(&format!("Location: {}\n", location)),
        None => output.push_str("Location: (not set)\n"),
    }

    match &state.car_details {
        Some(car) => {
            output.push_str(&format!("Car:      {}\n", car));
            output.push_str(&format!(
                "          {} {}, {}, {}, {}\n",
                car.price, currency, car.transmission, car.fuel_type, car.body_type
            ));
            output.push_str(&format!(
                "          Condition: {}, {} previous owner(s), accidents: {}\n",
                car.condition,
                car.previous_owners,
                if car.accident_history { "yes" } else { "no" }
            ));
            if !car.features.is_empty() {
                let features: Vec<&str> = car.features.iter().map(|s| s.as_str()).collect();
                output.push_str(&format!("          Features: {}\n", features.join(", ")));
            }
        }
        None => output.push_str("Car:      (not set)\n"),
    }

    match &state.contact {
        Some(contact) => {
            output.push_str(&format!(
                "Contact:  {} ({})\n",
                contact.phone, contact.preferred_contact
            ));
            if !contact.description.is_empty() {
                output.push_str(&format!("          {}\n", contact.description));
            }
        }
        None => output.push_str("Contact:  (not set)\n"),
    }

    output.push_str(&format!(
        "Media:    {} item(s), {} uploaded\n",
        state.media.len(),
        state.uploaded_media_urls.len()
    ));

    if let Some(id) = &state.edit_listing_id {
        output.push_str(&format!("Editing:  {}\n", id));
    }
    if let Some(id) = &state.published_listing_id {
        output.push_str(&format!("Published as: {}\n", id));
    }

    output
}
