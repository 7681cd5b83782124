//! Response bodies, one struct per endpoint shape.
//!
//! Each struct lists exactly the fields its route returns, so the JSON a
//! client sees is fixed at compile time.

use serde::{Deserialize, Serialize};

use crate::model::{Id, MenuEntry, Pizza, Restaurant, RestaurantPizza};

/// `{id, name, address}`, used by the restaurant listing and as the
/// nested restaurant of a created association
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantSummary {
    pub id: Id,
    pub name: String,
    pub address: String,
}

impl From<Restaurant> for RestaurantSummary {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
        }
    }
}

/// `{id, name, ingredients}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PizzaResponse {
    pub id: Id,
    pub name: String,
    pub ingredients: String,
}

impl From<Pizza> for PizzaResponse {
    fn from(pizza: Pizza) -> Self {
        Self {
            id: pizza.id,
            name: pizza.name,
            ingredients: pizza.ingredients,
        }
    }
}

/// One row of a restaurant's menu as shown on the restaurant detail route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuEntryResponse {
    pub id: Id,
    pub price: i64,
    pub pizza_id: Id,
    pub restaurant_id: Id,
    pub pizza: PizzaResponse,
}

impl From<MenuEntry> for MenuEntryResponse {
    fn from(entry: MenuEntry) -> Self {
        Self {
            id: entry.restaurant_pizza.id,
            price: entry.restaurant_pizza.price,
            pizza_id: entry.restaurant_pizza.pizza_id,
            restaurant_id: entry.restaurant_pizza.restaurant_id,
            pizza: entry.pizza.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantDetail {
    pub id: Id,
    pub name: String,
    pub address: String,
    pub restaurant_pizzas: Vec<MenuEntryResponse>,
}

impl RestaurantDetail {
    pub fn new(restaurant: Restaurant, menu: Vec<MenuEntry>) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas: menu.into_iter().map(MenuEntryResponse::from).collect(),
        }
    }
}

/// Body of a successful `POST /restaurant_pizzas`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestaurantPizzaResponse {
    pub id: Id,
    pub price: i64,
    pub pizza_id: Id,
    pub restaurant_id: Id,
    pub pizza: PizzaResponse,
    pub restaurant: RestaurantSummary,
}

impl RestaurantPizzaResponse {
    pub fn new(restaurant_pizza: RestaurantPizza, pizza: Pizza, restaurant: Restaurant) -> Self {
        Self {
            id: restaurant_pizza.id,
            price: restaurant_pizza.price,
            pizza_id: restaurant_pizza.pizza_id,
            restaurant_id: restaurant_pizza.restaurant_id,
            pizza: pizza.into(),
            restaurant: restaurant.into(),
        }
    }
}

/// Single-message error body: `{"error": "..."}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// Validation error body: `{"errors": ["..."]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorsResponse {
    pub errors: Vec<String>,
}

impl ErrorsResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_restaurant_detail_nests_pizzas_two_levels_deep() {
        let restaurant = Restaurant {
            id: 3,
            name: "Kiki's Pizza".to_string(),
            address: "address3".to_string(),
        };
        let menu = vec![MenuEntry {
            restaurant_pizza: RestaurantPizza {
                id: 7,
                price: 10,
                pizza_id: 2,
                restaurant_id: 3,
            },
            pizza: Pizza {
                id: 2,
                name: "Geri".to_string(),
                ingredients: "Dough, Tomato Sauce, Cheese, Pepperoni".to_string(),
            },
        }];

        let value = serde_json::to_value(RestaurantDetail::new(restaurant, menu)).unwrap();

        assert_eq!(
            value,
            json!({
                "id": 3,
                "name": "Kiki's Pizza",
                "address": "address3",
                "restaurant_pizzas": [{
                    "id": 7,
                    "price": 10,
                    "pizza_id": 2,
                    "restaurant_id": 3,
                    "pizza": {
                        "id": 2,
                        "name": "Geri",
                        "ingredients": "Dough, Tomato Sauce, Cheese, Pepperoni"
                    }
                }]
            })
        );
    }

    #[test]
    fn test_errors_response_shape() {
        let value = serde_json::to_value(ErrorsResponse::new("Price must be between 1 and 30")).unwrap();
        assert_eq!(value, json!({"errors": ["Price must be between 1 and 30"]}));
    }
}
