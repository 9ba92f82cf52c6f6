use axum::Json;
use axum::extract::{
  Path as AxumPath,
  Query,
  State
};
use axum::http::StatusCode;
use axum::response::{
  IntoResponse,
  Response
};
use futures::TryStreamExt;

use crate::app_state::AppState;
use crate::errors::ServerError;
use crate::models::{
  Customer,
  FindQuery
};

pub async fn find_all(
  State(state): State<AppState>
) -> Result<
  Json<Vec<Customer>>,
  ServerError
> {
  let rows = state
    .repo
    .find_all()
    .try_collect::<Vec<_>>()
    .await?;

  Ok(Json(rows))
}

/// An unknown id answers 200 with an
/// empty body.
pub async fn find_by_id(
  State(state): State<AppState>,
  AxumPath(customer_id): AxumPath<i64>
) -> Result<Response, ServerError> {
  let row = state
    .repo
    .find_by_id(customer_id)
    .await?;

  match row {
    | Some(customer) => {
      Ok(Json(customer).into_response())
    }
    | None => {
      Ok(StatusCode::OK.into_response())
    }
  }
}

pub async fn find_by_name_and_age(
  State(state): State<AppState>,
  Query(query): Query<FindQuery>
) -> Result<
  Json<Vec<Customer>>,
  ServerError
> {
  let rows = state
    .repo
    .find_by_name_and_age(
      &query.name,
      query.age
    )
    .try_collect::<Vec<_>>()
    .await?;

  Ok(Json(rows))
}

pub async fn save(
  State(state): State<AppState>,
  Json(payload): Json<Customer>
) -> Result<Json<Customer>, ServerError>
{
  let saved =
    state.repo.save(payload).await?;

  tracing::debug!(
    id = ?saved.id,
    name = %saved.name,
    age = saved.age,
    "customer saved"
  );

  Ok(Json(saved))
}
