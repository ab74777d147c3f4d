//! Car details CLI commands

use std::collections::BTreeSet;

use clap::Subcommand;

use crate::error::{MotorlotError, MotorlotResult};
use crate::models::{BodyType, CarDetailsPatch, Condition, FuelType, Transmission};

use super::CliDraftManager;

/// Car details subcommands
#[derive(Subcommand)]
pub enum DetailsCommands {
    /// Set one or more car detail fields
    Set {
        #[arg(long)]
        make: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long)]
        year: Option<u16>,
        #[arg(long)]
        price: Option<u64>,
        /// Mileage in kilometers
        #[arg(long)]
        mileage: Option<u32>,
        /// automatic or manual
        #[arg(long)]
        transmission: Option<String>,
        /// petrol, diesel, hybrid, or electric
        #[arg(long)]
        fuel: Option<String>,
        /// excellent, good, fair, or poor
        #[arg(long)]
        condition: Option<String>,
        /// sedan, suv, hatchback, coupe, convertible, pickup, van, or wagon
        #[arg(long)]
        body: Option<String>,
        #[arg(long)]
        color: Option<String>,
        /// Number of previous owners
        #[arg(long)]
        owners: Option<u8>,
        /// Whether the car has accident history
        #[arg(long)]
        accidents: Option<bool>,
        /// Comma-separated feature list (replaces the current set)
        #[arg(long)]
        features: Option<String>,
    },
    /// Clear all car details
    Clear,
}

/// Handle a details command
pub fn handle_details_command(
    manager: &mut CliDraftManager,
    cmd: DetailsCommands,
) -> MotorlotResult<()> {
    match cmd {
        DetailsCommands::Set {
            make,
            model,
            year,
            price,
            mileage,
            transmission,
            fuel,
            condition,
            body,
            color,
            owners,
            accidents,
            features,
        } => {
            let patch = CarDetailsPatch {
                make,
                model,
                year,
                price,
                mileage,
                transmission: parse_field(transmission, Transmission::parse, "transmission")?,
                fuel_type: parse_field(fuel, FuelType::parse, "fuel type")?,
                condition: parse_field(condition, Condition::parse, "condition")?,
                body_type: parse_field(body, BodyType::parse, "body type")?,
                color,
                previous_owners: owners,
                accident_history: accidents,
                features: features.map(|list| {
                    list.split(',')
                        .map(|f| f.trim().to_string())
                        .filter(|f| !f.is_empty())
                        .collect::<BTreeSet<String>>()
                }),
            };

            if patch.is_empty() {
                println!("No changes specified. Use flags like --make or --price.");
                return Ok(());
            }

            manager.set_car_details(Some(patch));
            match &manager.state().car_details {
                Some(details) => println!("Car details updated: {}", details),
                None => println!("Car details updated."),
            }
        }

        DetailsCommands::Clear => {
            manager.set_car_details(None);
            println!("Car details cleared.");
        }
    }

    Ok(())
}

fn parse_field<T>(
    value: Option<String>,
    parse: impl Fn(&str) -> Option<T>,
    what: &str,
) -> MotorlotResult<Option<T>> {
    match value {
        None => Ok(None),
        Some(raw) => parse(&raw)
            .map(Some)
            .ok_or_else(|| MotorlotError::Validation(format!("Invalid {}: '{}'", what, raw))),
    }
}
