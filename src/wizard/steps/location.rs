//! Location step
//!
//! Asks where the car is offered for sale.

use crate::error::MotorlotResult;
use crate::models::Location;

use super::super::prompt_string;

/// Location step
pub struct LocationStep;

impl LocationStep {
    /// Run the location step. Returns `None` if the seller skips it.
    pub fn run(default_city: &str) -> MotorlotResult<Option<Location>> {
        println!();
        println!("Step 1: Location");
        println!("================");
        println!();
        println!("Where is the car located? Buyers filter by city, so this is");
        println!("required before publishing. Leave empty to fill in later.");
        println!();

        let prompt = if default_city.is_empty() {
            "City: ".to_string()
        } else {
            format!("City [{}]: ", default_city)
        };
        let mut city = prompt_string(&prompt)?;
        if city.is_empty() {
            city = default_city.to_string();
        }
        if city.is_empty() {
            println!("Skipping location for now.");
            return Ok(None);
        }

        let neighborhood = prompt_string("Neighborhood (optional): ")?;

        Ok(Some(Location::new(city, neighborhood)))
    }
}
