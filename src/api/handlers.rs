use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{Html, Json},
    Json as RequestJson,
};
use log::{debug, error, info, warn};
use std::sync::Arc;

use crate::api::responses::{
    ErrorResponse, ErrorsResponse, HealthResponse, PizzaResponse, RestaurantDetail,
    RestaurantPizzaResponse, RestaurantSummary,
};
use crate::model::{Id, NewRestaurantPizza};
use crate::store::traits::Store;

pub type AppState<S> = Arc<S>;

type ErrorReply = (StatusCode, Json<ErrorResponse>);
type ErrorsReply = (StatusCode, Json<ErrorsResponse>);

const RESTAURANT_NOT_FOUND: &str = "Restaurant not found";
const PIZZA_NOT_FOUND: &str = "Pizza not found";

fn restaurant_not_found() -> ErrorReply {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new(RESTAURANT_NOT_FOUND)),
    )
}

fn internal_error(context: &str, e: anyhow::Error) -> ErrorReply {
    error!("{}: {:#}", context, e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(&format!("{:#}", e))),
    )
}

fn bad_request(message: impl Into<String>) -> ErrorsReply {
    (StatusCode::BAD_REQUEST, Json(ErrorsResponse::new(message)))
}

// A path segment that is not an integer cannot name a restaurant
fn restaurant_id(path: Result<Path<Id>, PathRejection>) -> Result<Id, ErrorReply> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => {
            debug!("Unparseable restaurant id: {}", rejection.body_text());
            Err(restaurant_not_found())
        }
    }
}

pub async fn index() -> Html<&'static str> {
    Html("<h1>Code challenge</h1>")
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

// Restaurant handlers
pub async fn list_restaurants<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<Vec<RestaurantSummary>>, ErrorReply> {
    match store.list_restaurants().await {
        Ok(restaurants) => Ok(Json(
            restaurants.into_iter().map(RestaurantSummary::from).collect(),
        )),
        Err(e) => Err(internal_error("Failed to list restaurants", e)),
    }
}

pub async fn get_restaurant<S: Store>(
    State(store): State<AppState<S>>,
    path: Result<Path<Id>, PathRejection>,
) -> Result<Json<RestaurantDetail>, ErrorReply> {
    let id = restaurant_id(path)?;

    let restaurant = match store.get_restaurant(id).await {
        Ok(Some(restaurant)) => restaurant,
        Ok(None) => {
            debug!("Restaurant {} not found", id);
            return Err(restaurant_not_found());
        }
        Err(e) => return Err(internal_error("Failed to fetch restaurant", e)),
    };

    match store.list_menu_for_restaurant(id).await {
        Ok(menu) => Ok(Json(RestaurantDetail::new(restaurant, menu))),
        Err(e) => Err(internal_error("Failed to list restaurant pizzas", e)),
    }
}

pub async fn delete_restaurant<S: Store>(
    State(store): State<AppState<S>>,
    path: Result<Path<Id>, PathRejection>,
) -> Result<StatusCode, ErrorReply> {
    let id = restaurant_id(path)?;

    match store.delete_restaurant(id).await {
        Ok(true) => {
            info!("Deleted restaurant {}", id);
            Ok(StatusCode::NO_CONTENT)
        }
        Ok(false) => {
            debug!("Restaurant {} not found", id);
            Err(restaurant_not_found())
        }
        Err(e) => Err(internal_error("Failed to delete restaurant", e)),
    }
}

// Pizza handlers
pub async fn list_pizzas<S: Store>(
    State(store): State<AppState<S>>,
) -> Result<Json<Vec<PizzaResponse>>, ErrorReply> {
    match store.list_pizzas().await {
        Ok(pizzas) => Ok(Json(pizzas.into_iter().map(PizzaResponse::from).collect())),
        Err(e) => Err(internal_error("Failed to list pizzas", e)),
    }
}

// RestaurantPizza handlers
pub async fn create_restaurant_pizza<S: Store>(
    State(store): State<AppState<S>>,
    payload: Result<RequestJson<NewRestaurantPizza>, JsonRejection>,
) -> Result<(StatusCode, Json<RestaurantPizzaResponse>), ErrorsReply> {
    let RequestJson(new_restaurant_pizza) = payload.map_err(|rejection| {
        warn!("Rejected restaurant pizza payload: {}", rejection.body_text());
        bad_request(rejection.body_text())
    })?;

    if let Err(e) = new_restaurant_pizza.validate() {
        warn!("Rejected restaurant pizza: {:?}", e);
        return Err(bad_request(e.to_string()));
    }

    let pizza = match store.get_pizza(new_restaurant_pizza.pizza_id).await {
        Ok(Some(pizza)) => pizza,
        Ok(None) => {
            warn!("Rejected restaurant pizza: pizza {} not found", new_restaurant_pizza.pizza_id);
            return Err(bad_request(PIZZA_NOT_FOUND));
        }
        Err(e) => return Err(bad_request(format!("{:#}", e))),
    };

    let restaurant = match store.get_restaurant(new_restaurant_pizza.restaurant_id).await {
        Ok(Some(restaurant)) => restaurant,
        Ok(None) => {
            warn!(
                "Rejected restaurant pizza: restaurant {} not found",
                new_restaurant_pizza.restaurant_id
            );
            return Err(bad_request(RESTAURANT_NOT_FOUND));
        }
        Err(e) => return Err(bad_request(format!("{:#}", e))),
    };

    match store.create_restaurant_pizza(new_restaurant_pizza).await {
        Ok(restaurant_pizza) => {
            info!(
                "Created restaurant pizza {} (restaurant {}, pizza {}, price {})",
                restaurant_pizza.id,
                restaurant_pizza.restaurant_id,
                restaurant_pizza.pizza_id,
                restaurant_pizza.price
            );
            Ok((
                StatusCode::CREATED,
                Json(RestaurantPizzaResponse::new(restaurant_pizza, pizza, restaurant)),
            ))
        }
        Err(e) => {
            error!("Failed to create restaurant pizza: {:#}", e);
            Err(bad_request(format!("{:#}", e)))
        }
    }
}
