//! Car details step
//!
//! Collects the structured description of the car.

use std::collections::BTreeSet;

use crate::error::MotorlotResult;
use crate::models::{BodyType, CarDetailsPatch, Condition, FuelType, Transmission};

use super::super::prompt_string;

/// Car details step
pub struct DetailsStep;

impl DetailsStep {
    /// Run the details step. Empty answers leave the corresponding field
    /// untouched, so re-running the wizard only overwrites what the seller
    /// types.
    pub fn run() -> MotorlotResult<CarDetailsPatch> {
        println!();
        println!("Step 3: Car Details");
        println!("===================");
        println!();
        println!("Describe the car. Press Enter to skip a field.");
        println!();

        let mut patch = CarDetailsPatch::default();

        let make = prompt_string("Make (e.g., Toyota): ")?;
        if !make.is_empty() {
            patch.make = Some(make);
        }

        let model = prompt_string("Model (e.g., Corolla): ")?;
        if !model.is_empty() {
            patch.model = Some(model);
        }

        let year = prompt_string("Year: ")?;
        if let Ok(year) = year.parse::<u16>() {
            patch.year = Some(year);
        }

        let price = prompt_string("Asking price: ")?;
        if let Ok(price) = price.parse::<u64>() {
            patch.price = Some(price);
        }

        let mileage = prompt_string("Mileage (km): ")?;
        if let Ok(mileage) = mileage.parse::<u32>() {
            patch.mileage = Some(mileage);
        }

        let transmission = prompt_string("Transmission (automatic/manual): ")?;
        if let Some(transmission) = Transmission::parse(&transmission) {
            patch.transmission = Some(transmission);
        }

        let fuel = prompt_string("Fuel type (petrol/diesel/hybrid/electric): ")?;
        if let Some(fuel) = FuelType::parse(&fuel) {
            patch.fuel_type = Some(fuel);
        }

        let condition = prompt_string("Condition (excellent/good/fair/poor): ")?;
        if let Some(condition) = Condition::parse(&condition) {
            patch.condition = Some(condition);
        }

        let body = prompt_string("Body type (sedan/suv/hatchback/coupe/...): ")?;
        if let Some(body) = BodyType::parse(&body) {
            patch.body_type = Some(body);
        }

        let color = prompt_string("Color: ")?;
        if !color.is_empty() {
            patch.color = Some(color);
        }

        let owners = prompt_string("Previous owners: ")?;
        if let Ok(owners) = owners.parse::<u8>() {
            patch.previous_owners = Some(owners);
        }

        let accidents = prompt_string("Any accident history? (yes/no): ")?;
        match accidents.to_lowercase().as_str() {
            "yes" | "y" => patch.accident_history = Some(true),
            "no" | "n" => patch.accident_history = Some(false),
            _ => {}
        }

        let features = prompt_string("Features (comma-separated, e.g., sunroof, leather seats): ")?;
        if !features.is_empty() {
            let set: BTreeSet<String> = features
                .split(',')
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty())
                .collect();
            if !set.is_empty() {
                patch.features = Some(set);
            }
        }

        Ok(patch)
    }
}
