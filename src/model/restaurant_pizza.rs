use crate::model::{Id, Pizza};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// Prices a restaurant may charge for a pizza, in whole currency units
pub const PRICE_RANGE: RangeInclusive<i64> = 1..=30;

/// "This restaurant sells this pizza at this price."
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantPizza {
    pub id: Id,
    pub price: i64,
    pub pizza_id: Id,
    pub restaurant_id: Id,
}

/// Whitelisted input for a new restaurant/pizza association.
///
/// Only these three fields are read from a request body; anything else in
/// the payload is ignored, and a missing or non-integer field fails
/// deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRestaurantPizza {
    pub price: i64,
    pub pizza_id: Id,
    pub restaurant_id: Id,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Price must be between 1 and 30")]
    PriceOutOfRange { price: i64 },
}

impl NewRestaurantPizza {
    pub fn new(price: i64, pizza_id: Id, restaurant_id: Id) -> Self {
        Self {
            price,
            pizza_id,
            restaurant_id,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !PRICE_RANGE.contains(&self.price) {
            return Err(ValidationError::PriceOutOfRange { price: self.price });
        }
        Ok(())
    }

    pub fn into_restaurant_pizza(self, id: Id) -> RestaurantPizza {
        RestaurantPizza {
            id,
            price: self.price,
            pizza_id: self.pizza_id,
            restaurant_id: self.restaurant_id,
        }
    }
}

/// A restaurant's association row together with the pizza it points at
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub restaurant_pizza: RestaurantPizza,
    pub pizza: Pizza,
}
