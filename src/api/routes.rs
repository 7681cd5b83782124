use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers;
use crate::store::traits::Store;

pub fn create_router<S: Store + 'static>() -> Router<Arc<S>> {
    Router::new()
        .route("/", get(handlers::index))
        // Health check
        .route("/health", get(handlers::health_check))
        // Restaurants
        .route("/restaurants", get(handlers::list_restaurants::<S>))
        .route(
            "/restaurants/:id",
            get(handlers::get_restaurant::<S>).delete(handlers::delete_restaurant::<S>),
        )
        // Pizzas
        .route("/pizzas", get(handlers::list_pizzas::<S>))
        // Restaurant pizzas
        .route(
            "/restaurant_pizzas",
            post(handlers::create_restaurant_pizza::<S>),
        )
}

