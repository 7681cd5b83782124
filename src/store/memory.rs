use anyhow::{bail, Result};
use parking_lot::RwLock;
use std::collections::BTreeMap;

use crate::model::{
    Id, MenuEntry, NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza,
};
use crate::store::traits::{PizzaStore, RestaurantPizzaStore, RestaurantStore, Store};

#[derive(Debug, Default)]
struct Tables {
    restaurants: BTreeMap<Id, Restaurant>,
    pizzas: BTreeMap<Id, Pizza>,
    restaurant_pizzas: BTreeMap<Id, RestaurantPizza>,
    next_restaurant_id: Id,
    next_pizza_id: Id,
    next_restaurant_pizza_id: Id,
}

/// Process-local store with the same semantics as the PostgreSQL tables:
/// ids start at 1, listings are ordered by id, and foreign keys are checked
/// on insert.
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn next_id(counter: &mut Id) -> Id {
    *counter += 1;
    *counter
}

#[async_trait::async_trait]
impl RestaurantStore for MemoryStore {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>> {
        Ok(self.tables.read().restaurants.values().cloned().collect())
    }

    async fn get_restaurant(&self, id: Id) -> Result<Option<Restaurant>> {
        Ok(self.tables.read().restaurants.get(&id).cloned())
    }

    async fn create_restaurant(&self, restaurant: NewRestaurant) -> Result<Restaurant> {
        let mut tables = self.tables.write();
        let restaurant = restaurant.into_restaurant(next_id(&mut tables.next_restaurant_id));
        tables.restaurants.insert(restaurant.id, restaurant.clone());
        Ok(restaurant)
    }

    async fn delete_restaurant(&self, id: Id) -> Result<bool> {
        let mut tables = self.tables.write();
        if tables.restaurants.remove(&id).is_none() {
            return Ok(false);
        }
        tables
            .restaurant_pizzas
            .retain(|_, restaurant_pizza| restaurant_pizza.restaurant_id != id);
        Ok(true)
    }
}

#[async_trait::async_trait]
impl PizzaStore for MemoryStore {
    async fn list_pizzas(&self) -> Result<Vec<Pizza>> {
        Ok(self.tables.read().pizzas.values().cloned().collect())
    }

    async fn get_pizza(&self, id: Id) -> Result<Option<Pizza>> {
        Ok(self.tables.read().pizzas.get(&id).cloned())
    }

    async fn create_pizza(&self, pizza: NewPizza) -> Result<Pizza> {
        let mut tables = self.tables.write();
        let pizza = pizza.into_pizza(next_id(&mut tables.next_pizza_id));
        tables.pizzas.insert(pizza.id, pizza.clone());
        Ok(pizza)
    }
}

#[async_trait::async_trait]
impl RestaurantPizzaStore for MemoryStore {
    async fn create_restaurant_pizza(
        &self,
        restaurant_pizza: NewRestaurantPizza,
    ) -> Result<RestaurantPizza> {
        let mut tables = self.tables.write();

        if !tables.restaurants.contains_key(&restaurant_pizza.restaurant_id) {
            bail!(
                "Foreign key violation: restaurant {} does not exist",
                restaurant_pizza.restaurant_id
            );
        }
        if !tables.pizzas.contains_key(&restaurant_pizza.pizza_id) {
            bail!(
                "Foreign key violation: pizza {} does not exist",
                restaurant_pizza.pizza_id
            );
        }

        let restaurant_pizza =
            restaurant_pizza.into_restaurant_pizza(next_id(&mut tables.next_restaurant_pizza_id));
        tables
            .restaurant_pizzas
            .insert(restaurant_pizza.id, restaurant_pizza.clone());
        Ok(restaurant_pizza)
    }

    async fn list_menu_for_restaurant(&self, restaurant_id: Id) -> Result<Vec<MenuEntry>> {
        let tables = self.tables.read();
        let entries = tables
            .restaurant_pizzas
            .values()
            .filter(|restaurant_pizza| restaurant_pizza.restaurant_id == restaurant_id)
            .filter_map(|restaurant_pizza| {
                tables
                    .pizzas
                    .get(&restaurant_pizza.pizza_id)
                    .map(|pizza| MenuEntry {
                        restaurant_pizza: restaurant_pizza.clone(),
                        pizza: pizza.clone(),
                    })
            })
            .collect();
        Ok(entries)
    }

    async fn count_restaurant_pizzas(&self) -> Result<i64> {
        Ok(self.tables.read().restaurant_pizzas.len() as i64)
    }
}

impl Store for MemoryStore {}
