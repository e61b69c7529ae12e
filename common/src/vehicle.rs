//! # Vehicle Model
//!
//! Defines the vehicle record a premium is quoted for.
//!
//! The record is a plain value: it is built once with all four attributes and
//! never changes afterwards. Nothing is validated, so implausible years or
//! negative prices are stored as given.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Anything that can report the model year of a vehicle.
///
/// The premium calculator only needs this capability, not the full record.
pub trait ModelYear {
    fn model_year(&self) -> i32;
}

/// Descriptive attributes of a single car.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vehicle {
    model: String,
    brand: String,
    year: i32,
    price: i64,
}

impl Vehicle {
    pub fn new(model: impl Into<String>, brand: impl Into<String>, year: i32, price: i64) -> Self {
        Self {
            model: model.into(),
            brand: brand.into(),
            year,
            price,
        }
    }

    /// The Honda City used when no vehicle is given on the command line.
    pub fn default_sample() -> Self {
        Self::new("City", "Honda", 2013, 170_000)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn price(&self) -> i64 {
        self.price
    }
}

impl ModelYear for Vehicle {
    fn model_year(&self) -> i32 {
        self.year
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}:{}", self.model, self.brand, self.year, self.price)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VehicleParseError {
    #[error("expected 'model:brand:year:price', got {found} field(s)")]
    FieldCount { found: usize },
    #[error("invalid year '{value}': {reason}")]
    Year { value: String, reason: String },
    #[error("invalid price '{value}': {reason}")]
    Price { value: String, reason: String },
}

impl FromStr for Vehicle {
    type Err = VehicleParseError;

    /// Parses `model:brand:year:price`, e.g. `City:Honda:2013:170000`.
    ///
    /// Model and brand are kept verbatim. Year and price accept any integer
    /// that fits their type, including negative values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(':').collect();
        let [model, brand, year, price] = fields.as_slice() else {
            return Err(VehicleParseError::FieldCount { found: fields.len() });
        };

        let year = year.trim().parse::<i32>().map_err(|e| VehicleParseError::Year {
            value: year.to_string(),
            reason: e.to_string(),
        })?;

        let price = price.trim().parse::<i64>().map_err(|e| VehicleParseError::Price {
            value: price.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Vehicle::new(*model, *brand, year, price))
    }
}
