use crate::model::{
    Id, MenuEntry, NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza,
};
use anyhow::Result;

#[async_trait::async_trait]
pub trait RestaurantStore: Send + Sync {
    /// List every restaurant ordered by id
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>>;
    async fn get_restaurant(&self, id: Id) -> Result<Option<Restaurant>>;
    async fn create_restaurant(&self, restaurant: NewRestaurant) -> Result<Restaurant>;
    /// Delete a restaurant together with its restaurant_pizzas rows.
    /// Returns false if no restaurant had this id.
    async fn delete_restaurant(&self, id: Id) -> Result<bool>;
}

#[async_trait::async_trait]
pub trait PizzaStore: Send + Sync {
    /// List every pizza ordered by id
    async fn list_pizzas(&self) -> Result<Vec<Pizza>>;
    async fn get_pizza(&self, id: Id) -> Result<Option<Pizza>>;
    async fn create_pizza(&self, pizza: NewPizza) -> Result<Pizza>;
}

#[async_trait::async_trait]
pub trait RestaurantPizzaStore: Send + Sync {
    /// Insert a price association. Callers validate the price first.
    async fn create_restaurant_pizza(
        &self,
        restaurant_pizza: NewRestaurantPizza,
    ) -> Result<RestaurantPizza>;
    /// Association rows of one restaurant with their pizzas, ordered by row id
    async fn list_menu_for_restaurant(&self, restaurant_id: Id) -> Result<Vec<MenuEntry>>;
    /// Number of association rows across all restaurants
    async fn count_restaurant_pizzas(&self) -> Result<i64>;
}

pub trait Store: RestaurantStore + PizzaStore + RestaurantPizzaStore + Send + Sync {}
