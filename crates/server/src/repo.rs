//! Data access for the `customer` table.
mod postgres;
mod sqlite;

use async_trait::async_trait;
use futures::stream::BoxStream;
use thiserror::Error;

use crate::models::Customer;

pub use postgres::PostgresCustomerRepo;
pub use sqlite::SqliteCustomerRepo;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("customer {0} does not exist")]
    MissingRow(i64),
}

/// Lazy sequence of rows; the query runs as the stream is polled.
pub type CustomerStream<'a> = BoxStream<'a, Result<Customer, RepoError>>;

#[async_trait]
pub trait CustomerRepo: Send + Sync {
    /// Creates the `customer` table when it does not exist yet.
    async fn ensure_schema(&self) -> Result<(), RepoError>;

    fn find_all(&self) -> CustomerStream<'_>;

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, RepoError>;

    fn find_by_name_and_age(&self, name: &str, age: i32) -> CustomerStream<'_>;

    /// Inserts when `customer.id` is `None`, otherwise replaces the row with
    /// that id. Returns the stored row including its id.
    async fn save(&self, customer: Customer) -> Result<Customer, RepoError>;

    /// Returns the number of rows removed.
    async fn delete_all(&self) -> Result<u64, RepoError>;
}
