use crate::model::Id;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pizza {
    pub id: Id,
    pub name: String,
    pub ingredients: String, // Comma-delimited ingredient names
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}

impl NewPizza {
    pub fn new(name: impl Into<String>, ingredients: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: ingredients.into(),
        }
    }

    pub fn into_pizza(self, id: Id) -> Pizza {
        Pizza {
            id,
            name: self.name,
            ingredients: self.ingredients,
        }
    }
}
