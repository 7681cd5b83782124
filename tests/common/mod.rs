#![allow(dead_code)]

use pizza_restaurants::model::{NewPizza, NewRestaurant};
use pizza_restaurants::store::Store;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;

// Test client wrapper for making API calls
pub struct TestClient<S> {
    client: Client,
    base_url: String,
    pub store: Arc<S>,
}

impl<S: Store + 'static> TestClient<S> {
    /// Seed `store` with two restaurants and three pizzas, then serve it on
    /// an ephemeral port. The store must be empty with ids starting at 1.
    pub async fn start(store: S) -> Self {
        let store = Arc::new(store);
        for (name, address) in [("Karen's Pizza Shack", "address1"), ("Sanjay's Pizza", "address2")] {
            store
                .create_restaurant(NewRestaurant::new(name, address))
                .await
                .unwrap();
        }
        for (name, ingredients) in [
            ("Emma", "Dough, Tomato Sauce, Cheese"),
            ("Geri", "Dough, Tomato Sauce, Cheese, Pepperoni"),
            ("Melanie", "Dough, Sauce, Ricotta, Red peppers, Mustard"),
        ] {
            store
                .create_pizza(NewPizza::new(name, ingredients))
                .await
                .unwrap();
        }

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        tokio::spawn(pizza_restaurants::serve(store.clone(), listener));

        Self {
            client: Client::new(),
            base_url: format!("http://{}", address),
            store,
        }
    }

    pub async fn post(&self, path: &str, json: Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .json(&json)
            .send()
            .await
            .expect("request failed")
    }

    pub async fn post_raw(&self, path: &str, content_type: &str, body: &str) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.base_url, path))
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body.to_string())
            .send()
            .await
            .expect("request failed")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("request failed")
    }

    pub async fn delete(&self, path: &str) -> reqwest::Response {
        self.client
            .delete(format!("{}{}", self.base_url, path))
            .send()
            .await
            .expect("request failed")
    }

    pub async fn row_count(&self) -> i64 {
        self.store.count_restaurant_pizzas().await.unwrap()
    }

    async fn create_all(&self, rows: &[(i64, i64, i64)]) {
        for &(price, pizza_id, restaurant_id) in rows {
            let response = self
                .post(
                    "/restaurant_pizzas",
                    json!({"price": price, "pizza_id": pizza_id, "restaurant_id": restaurant_id}),
                )
                .await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }
    }
}

/// Prices 0, 31 and 35 are rejected without writing; 1 and 30 are stored
pub async fn check_price_bounds<S: Store + 'static>(client: &TestClient<S>) {
    for price in [0, 31, 35] {
        let response = client
            .post("/restaurant_pizzas", json!({"price": price, "pizza_id": 1, "restaurant_id": 1}))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"errors": ["Price must be between 1 and 30"]}));
    }
    assert_eq!(client.row_count().await, 0);

    for price in [1, 30] {
        let response = client
            .post("/restaurant_pizzas", json!({"price": price, "pizza_id": 2, "restaurant_id": 2}))
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: Value = response.json().await.unwrap();
        assert_eq!(body["price"], price);
        assert_eq!(body["pizza"]["name"], "Geri");
        assert_eq!(body["restaurant"]["name"], "Sanjay's Pizza");
    }
    assert_eq!(client.row_count().await, 2);
}

/// Created rows come back through the restaurant detail in creation order,
/// each with its pizza nested
pub async fn check_round_trip<S: Store + 'static>(client: &TestClient<S>) {
    // Same pair twice at different prices, plus a row for another restaurant
    client
        .create_all(&[(10, 3, 1), (12, 3, 1), (20, 2, 1), (5, 1, 2)])
        .await;

    let response = client.get("/restaurants/1").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.unwrap();
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Karen's Pizza Shack");
    assert_eq!(body["address"], "address1");

    let rows = body["restaurant_pizzas"].as_array().unwrap();
    let triples: Vec<(i64, i64, i64)> = rows
        .iter()
        .map(|row| {
            (
                row["price"].as_i64().unwrap(),
                row["pizza_id"].as_i64().unwrap(),
                row["restaurant_id"].as_i64().unwrap(),
            )
        })
        .collect();
    assert_eq!(triples, vec![(10, 3, 1), (12, 3, 1), (20, 2, 1)]);

    assert_eq!(
        rows[2]["pizza"],
        json!({"id": 2, "name": "Geri", "ingredients": "Dough, Tomato Sauce, Cheese, Pepperoni"})
    );
    for row in rows {
        assert_eq!(row["pizza"]["id"], row["pizza_id"]);
    }
}

/// Deleting a restaurant removes its rows and nothing else
pub async fn check_cascade_delete<S: Store + 'static>(client: &TestClient<S>) {
    client
        .create_all(&[(3, 1, 1), (4, 2, 1), (6, 3, 1), (8, 1, 2)])
        .await;
    assert_eq!(client.row_count().await, 4);

    let response = client.delete("/restaurants/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(response.text().await.unwrap().is_empty());

    assert_eq!(client.row_count().await, 1);
    assert!(client.store.list_menu_for_restaurant(1).await.unwrap().is_empty());

    // Gone from every route
    assert_eq!(client.get("/restaurants/1").await.status(), StatusCode::NOT_FOUND);
    assert_eq!(client.delete("/restaurants/1").await.status(), StatusCode::NOT_FOUND);
    let restaurants: Value = client.get("/restaurants").await.json().await.unwrap();
    assert_eq!(restaurants, json!([{"id": 2, "name": "Sanjay's Pizza", "address": "address2"}]));

    // Pizzas are untouched
    let pizzas: Value = client.get("/pizzas").await.json().await.unwrap();
    assert_eq!(pizzas.as_array().unwrap().len(), 3);

    // The other restaurant keeps its row
    let detail: Value = client.get("/restaurants/2").await.json().await.unwrap();
    assert_eq!(detail["restaurant_pizzas"].as_array().unwrap().len(), 1);

    // New rows for the deleted restaurant are refused
    let response = client
        .post("/restaurant_pizzas", json!({"price": 9, "pizza_id": 1, "restaurant_id": 1}))
        .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"errors": ["Restaurant not found"]}));
    assert_eq!(client.row_count().await, 1);
}
