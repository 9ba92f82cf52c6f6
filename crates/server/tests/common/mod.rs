use std::sync::Arc;

use customer_server::repo::{CustomerRepo, SqliteCustomerRepo};
use sqlx::sqlite::SqlitePoolOptions;

/// Fresh in-memory database with the customer table in place. Every
/// connection to `sqlite::memory:` is its own database, hence one connection.
pub async fn memory_repo() -> Arc<dyn CustomerRepo> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    let repo = SqliteCustomerRepo::new(pool);
    repo.ensure_schema().await.unwrap();
    Arc::new(repo)
}
