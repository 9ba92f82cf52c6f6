use async_trait::async_trait;
use futures::{StreamExt, TryStreamExt};
use sqlx::PgPool;

use super::{CustomerRepo, CustomerStream, RepoError};
use crate::models::Customer;
use crate::schema;

#[derive(Clone)]
pub struct PostgresCustomerRepo {
    pool: PgPool,
}

impl PostgresCustomerRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepo for PostgresCustomerRepo {
    async fn ensure_schema(&self) -> Result<(), RepoError> {
        schema::apply_postgres(&self.pool).await
    }

    fn find_all(&self) -> CustomerStream<'_> {
        sqlx::query_as::<_, Customer>("SELECT id, name, age FROM customer")
            .fetch(&self.pool)
            .map_err(RepoError::from)
            .boxed()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Customer>, RepoError> {
        let row = sqlx::query_as::<_, Customer>("SELECT id, name, age FROM customer WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    fn find_by_name_and_age(&self, name: &str, age: i32) -> CustomerStream<'_> {
        sqlx::query_as::<_, Customer>("select * from customer where name = $1 and age = $2")
            .bind(name.to_owned())
            .bind(age)
            .fetch(&self.pool)
            .map_err(RepoError::from)
            .boxed()
    }

    async fn save(&self, customer: Customer) -> Result<Customer, RepoError> {
        match customer.id {
            None => {
                let row = sqlx::query_as::<_, Customer>(
                    "INSERT INTO customer (name, age) VALUES ($1, $2) RETURNING id, name, age",
                )
                .bind(&customer.name)
                .bind(customer.age)
                .fetch_one(&self.pool)
                .await?;
                Ok(row)
            }
            Some(id) => sqlx::query_as::<_, Customer>(
                "UPDATE customer SET name = $1, age = $2 WHERE id = $3 RETURNING id, name, age",
            )
            .bind(&customer.name)
            .bind(customer.age)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(RepoError::MissingRow(id)),
        }
    }

    async fn delete_all(&self) -> Result<u64, RepoError> {
        let result = sqlx::query("DELETE FROM customer")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
