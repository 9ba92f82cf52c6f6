mod customers;
mod health;

use axum::Router;
use axum::routing::{
  get,
  post
};

use crate::app_state::AppState;

pub fn router(
  state: AppState
) -> Router {
  Router::new()
        .route("/health", get(health::health))
        .route("/api/all", get(customers::find_all))
        .route("/api/id/:customer_id", get(customers::find_by_id))
        .route("/api/find", get(customers::find_by_name_and_age))
        .route("/api/save", post(customers::save))
        .with_state(state)
}
