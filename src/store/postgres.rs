use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, postgres::PgRow, Executor, PgPool, Row};

use crate::model::{
    Id, MenuEntry, NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza,
};
use crate::store::traits::{PizzaStore, RestaurantPizzaStore, RestaurantStore, Store};

const CREATE_TABLES: &str = include_str!("../../migrations/001_create_tables.sql");

#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Create a new PostgreSQL store with the given database URL
    pub async fn new(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await
            .context("Failed to create PostgreSQL connection pool")?;

        Ok(Self { pool })
    }

    /// Create the tables if they do not exist yet
    pub async fn migrate(&self) -> Result<()> {
        // Plain string queries go over the simple protocol, which allows several statements
        self.pool
            .execute(CREATE_TABLES)
            .await
            .context("Failed to create database tables")?;
        Ok(())
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

fn restaurant_from_row(row: &PgRow) -> Restaurant {
    Restaurant {
        id: row.get("id"),
        name: row.get("name"),
        address: row.get("address"),
    }
}

fn pizza_from_row(row: &PgRow) -> Pizza {
    Pizza {
        id: row.get("id"),
        name: row.get("name"),
        ingredients: row.get("ingredients"),
    }
}

#[async_trait::async_trait]
impl RestaurantStore for PostgresStore {
    async fn list_restaurants(&self) -> Result<Vec<Restaurant>> {
        let rows = sqlx::query("SELECT id, name, address FROM restaurants ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list restaurants")?;

        Ok(rows.iter().map(restaurant_from_row).collect())
    }

    async fn get_restaurant(&self, id: Id) -> Result<Option<Restaurant>> {
        let row = sqlx::query("SELECT id, name, address FROM restaurants WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch restaurant")?;

        Ok(row.as_ref().map(restaurant_from_row))
    }

    async fn create_restaurant(&self, restaurant: NewRestaurant) -> Result<Restaurant> {
        let row = sqlx::query("INSERT INTO restaurants (name, address) VALUES ($1, $2) RETURNING id")
            .bind(&restaurant.name)
            .bind(&restaurant.address)
            .fetch_one(&self.pool)
            .await
            .context("Failed to create restaurant")?;

        Ok(restaurant.into_restaurant(row.get("id")))
    }

    async fn delete_restaurant(&self, id: Id) -> Result<bool> {
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin transaction")?;

        // The foreign key cascades too; deleting children first keeps this
        // correct against tables created without ON DELETE CASCADE.
        sqlx::query("DELETE FROM restaurant_pizzas WHERE restaurant_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Failed to delete restaurant pizzas")?;

        let result = sqlx::query("DELETE FROM restaurants WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Failed to delete restaurant")?;

        if result.rows_affected() == 0 {
            tx.rollback()
                .await
                .context("Failed to roll back transaction")?;
            return Ok(false);
        }

        tx.commit().await.context("Failed to commit transaction")?;
        Ok(true)
    }
}

#[async_trait::async_trait]
impl PizzaStore for PostgresStore {
    async fn list_pizzas(&self) -> Result<Vec<Pizza>> {
        let rows = sqlx::query("SELECT id, name, ingredients FROM pizzas ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Failed to list pizzas")?;

        Ok(rows.iter().map(pizza_from_row).collect())
    }

    async fn get_pizza(&self, id: Id) -> Result<Option<Pizza>> {
        let row = sqlx::query("SELECT id, name, ingredients FROM pizzas WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch pizza")?;

        Ok(row.as_ref().map(pizza_from_row))
    }

    async fn create_pizza(&self, pizza: NewPizza) -> Result<Pizza> {
        let row = sqlx::query("INSERT INTO pizzas (name, ingredients) VALUES ($1, $2) RETURNING id")
            .bind(&pizza.name)
            .bind(&pizza.ingredients)
            .fetch_one(&self.pool)
            .await
            .context("Failed to create pizza")?;

        Ok(pizza.into_pizza(row.get("id")))
    }
}

#[async_trait::async_trait]
impl RestaurantPizzaStore for PostgresStore {
    async fn create_restaurant_pizza(
        &self,
        restaurant_pizza: NewRestaurantPizza,
    ) -> Result<RestaurantPizza> {
        let row = sqlx::query(
            r#"
            INSERT INTO restaurant_pizzas (price, pizza_id, restaurant_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(restaurant_pizza.price)
        .bind(restaurant_pizza.pizza_id)
        .bind(restaurant_pizza.restaurant_id)
        .fetch_one(&self.pool)
        .await
        .context("Failed to create restaurant pizza")?;

        Ok(restaurant_pizza.into_restaurant_pizza(row.get("id")))
    }

    async fn list_menu_for_restaurant(&self, restaurant_id: Id) -> Result<Vec<MenuEntry>> {
        let rows = sqlx::query(
            r#"
            SELECT rp.id, rp.price, rp.pizza_id, rp.restaurant_id,
                   p.name AS pizza_name, p.ingredients AS pizza_ingredients
            FROM restaurant_pizzas rp
            JOIN pizzas p ON p.id = rp.pizza_id
            WHERE rp.restaurant_id = $1
            ORDER BY rp.id
            "#,
        )
        .bind(restaurant_id)
        .fetch_all(&self.pool)
        .await
        .context("Failed to list restaurant pizzas")?;

        let entries = rows
            .into_iter()
            .map(|row| MenuEntry {
                restaurant_pizza: RestaurantPizza {
                    id: row.get("id"),
                    price: row.get("price"),
                    pizza_id: row.get("pizza_id"),
                    restaurant_id: row.get("restaurant_id"),
                },
                pizza: Pizza {
                    id: row.get("pizza_id"),
                    name: row.get("pizza_name"),
                    ingredients: row.get("pizza_ingredients"),
                },
            })
            .collect();

        Ok(entries)
    }

    async fn count_restaurant_pizzas(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM restaurant_pizzas")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count restaurant pizzas")?;

        Ok(row.get("count"))
    }
}

impl Store for PostgresStore {}
