use crate::model::{NewPizza, NewRestaurant, NewRestaurantPizza};
use crate::store::traits::Store;
use anyhow::{Context, Result};
use log::info;

const RESTAURANTS: &[(&str, &str)] = &[
    ("Karen's Pizza Shack", "address1"),
    ("Sanjay's Pizza", "address2"),
    ("Kiki's Pizza", "address3"),
];

const PIZZAS: &[(&str, &str)] = &[
    ("Emma", "Dough, Tomato Sauce, Cheese"),
    ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
    ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
];

/// (price, pizza index, restaurant index) into the tables above
const MENU: &[(i64, usize, usize)] = &[(1, 0, 0), (4, 1, 1), (5, 2, 2)];

/// Load sample restaurants, pizzas and prices.
///
/// Does nothing if the store already holds restaurants, so running it on
/// every startup is safe.
pub async fn load_seed_data<S: Store>(store: &S) -> Result<()> {
    if !store.list_restaurants().await?.is_empty() {
        info!("Restaurants already present, skipping seed data");
        return Ok(());
    }

    let mut restaurants = Vec::with_capacity(RESTAURANTS.len());
    for (name, address) in RESTAURANTS {
        let restaurant = store
            .create_restaurant(NewRestaurant::new(*name, *address))
            .await
            .with_context(|| format!("Failed to seed restaurant {}", name))?;
        restaurants.push(restaurant);
    }

    let mut pizzas = Vec::with_capacity(PIZZAS.len());
    for (name, ingredients) in PIZZAS {
        let pizza = store
            .create_pizza(NewPizza::new(*name, *ingredients))
            .await
            .with_context(|| format!("Failed to seed pizza {}", name))?;
        pizzas.push(pizza);
    }

    for &(price, pizza, restaurant) in MENU {
        let new_restaurant_pizza =
            NewRestaurantPizza::new(price, pizzas[pizza].id, restaurants[restaurant].id);
        new_restaurant_pizza.validate()?;
        store
            .create_restaurant_pizza(new_restaurant_pizza)
            .await
            .context("Failed to seed restaurant pizza")?;
    }

    info!(
        "Seeded {} restaurants, {} pizzas and {} restaurant pizzas",
        restaurants.len(),
        pizzas.len(),
        MENU.len()
    );
    Ok(())
}
