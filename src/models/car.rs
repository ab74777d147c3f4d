//! Car details model
//!
//! The structured description of the car being sold: identity (make, model,
//! year), pricing, mechanical attributes, history, and the feature set.
//! Partial updates are applied through `CarDetailsPatch`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Transmission type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Transmission {
    #[default]
    Automatic,
    Manual,
}

impl Transmission {
    /// Parse transmission type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "automatic" | "auto" => Some(Self::Automatic),
            "manual" | "stick" => Some(Self::Manual),
            _ => None,
        }
    }
}

impl fmt::Display for Transmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Automatic => write!(f, "Automatic"),
            Self::Manual => write!(f, "Manual"),
        }
    }
}

/// Fuel type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    #[default]
    Petrol,
    Diesel,
    Hybrid,
    Electric,
}

impl FuelType {
    /// Parse fuel type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "petrol" | "gasoline" | "gas" => Some(Self::Petrol),
            "diesel" => Some(Self::Diesel),
            "hybrid" => Some(Self::Hybrid),
            "electric" | "ev" => Some(Self::Electric),
            _ => None,
        }
    }
}

impl fmt::Display for FuelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Petrol => write!(f, "Petrol"),
            Self::Diesel => write!(f, "Diesel"),
            Self::Hybrid => write!(f, "Hybrid"),
            Self::Electric => write!(f, "Electric"),
        }
    }
}

/// Overall condition of the car
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    Excellent,
    #[default]
    Good,
    Fair,
    Poor,
}

impl Condition {
    /// Parse condition from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "excellent" => Some(Self::Excellent),
            "good" => Some(Self::Good),
            "fair" => Some(Self::Fair),
            "poor" => Some(Self::Poor),
            _ => None,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Excellent => write!(f, "Excellent"),
            Self::Good => write!(f, "Good"),
            Self::Fair => write!(f, "Fair"),
            Self::Poor => write!(f, "Poor"),
        }
    }
}

/// Body type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BodyType {
    #[default]
    Sedan,
    Suv,
    Hatchback,
    Coupe,
    Convertible,
    Pickup,
    Van,
    Wagon,
}

impl BodyType {
    /// Parse body type from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "sedan" | "saloon" => Some(Self::Sedan),
            "suv" | "crossover" => Some(Self::Suv),
            "hatchback" | "hatch" => Some(Self::Hatchback),
            "coupe" => Some(Self::Coupe),
            "convertible" | "cabriolet" => Some(Self::Convertible),
            "pickup" | "truck" => Some(Self::Pickup),
            "van" | "minivan" => Some(Self::Van),
            "wagon" | "estate" => Some(Self::Wagon),
            _ => None,
        }
    }
}

impl fmt::Display for BodyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sedan => write!(f, "Sedan"),
            Self::Suv => write!(f, "SUV"),
            Self::Hatchback => write!(f, "Hatchback"),
            Self::Coupe => write!(f, "Coupe"),
            Self::Convertible => write!(f, "Convertible"),
            Self::Pickup => write!(f, "Pickup"),
            Self::Van => write!(f, "Van"),
            Self::Wagon => write!(f, "Wagon"),
        }
    }
}

/// Structured description of the car being sold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CarDetails {
    /// Manufacturer (e.g., "Toyota")
    #[serde(default)]
    pub make: String,

    /// Model name (e.g., "Corolla")
    #[serde(default)]
    pub model: String,

    /// Model year
    #[serde(default)]
    pub year: u16,

    /// Asking price in whole currency units
    #[serde(default)]
    pub price: u64,

    /// Odometer reading in kilometers
    #[serde(default)]
    pub mileage: u32,

    #[serde(default)]
    pub transmission: Transmission,

    #[serde(default)]
    pub fuel_type: FuelType,

    #[serde(default)]
    pub condition: Condition,

    #[serde(default)]
    pub body_type: BodyType,

    /// Exterior color
    #[serde(default)]
    pub color: String,

    /// Number of previous owners
    #[serde(default)]
    pub previous_owners: u8,

    /// Whether the car has been in an accident
    #[serde(default)]
    pub accident_history: bool,

    /// Equipment and options (e.g., "sunroof", "leather seats")
    #[serde(default)]
    pub features: BTreeSet<String>,
}

impl CarDetails {
    /// Apply a partial update. Existing values win over defaults; patch values
    /// win over existing ones.
    pub fn apply(&mut self, patch: CarDetailsPatch) {
        if let Some(make) = patch.make {
            self.make = make;
        }
        if let Some(model) = patch.model {
            self.model = model;
        }
        if let Some(year) = patch.year {
            self.year = year;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(mileage) = patch.mileage {
            self.mileage = mileage;
        }
        if let Some(transmission) = patch.transmission {
            self.transmission = transmission;
        }
        if let Some(fuel_type) = patch.fuel_type {
            self.fuel_type = fuel_type;
        }
        if let Some(condition) = patch.condition {
            self.condition = condition;
        }
        if let Some(body_type) = patch.body_type {
            self.body_type = body_type;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(previous_owners) = patch.previous_owners {
            self.previous_owners = previous_owners;
        }
        if let Some(accident_history) = patch.accident_history {
            self.accident_history = accident_history;
        }
        if let Some(features) = patch.features {
            self.features = features;
        }
    }
}

impl fmt::Display for CarDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} - {} km",
            self.year, self.make, self.model, self.mileage
        )
    }
}

/// A partial update to `CarDetails`; `None` fields are left untouched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CarDetailsPatch {
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<u16>,
    pub price: Option<u64>,
    pub mileage: Option<u32>,
    pub transmission: Option<Transmission>,
    pub fuel_type: Option<FuelType>,
    pub condition: Option<Condition>,
    pub body_type: Option<BodyType>,
    pub color: Option<String>,
    pub previous_owners: Option<u8>,
    pub accident_history: Option<bool>,
    pub features: Option<BTreeSet<String>>,
}

impl CarDetailsPatch {
    /// Whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
