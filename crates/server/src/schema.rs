use sqlx::{Pool, Postgres, Sqlite};

use crate::repo::RepoError;

const SQLITE_SCHEMA: &str = include_str!("../res/sql/sqlite/schema.sql");
const POSTGRES_SCHEMA: &str = include_str!("../res/sql/postgres/schema.sql");

pub async fn apply_sqlite(pool: &Pool<Sqlite>) -> Result<(), RepoError> {
    for stmt in statements(SQLITE_SCHEMA) {
        sqlx::query(stmt).execute(pool).await?;
    }
    Ok(())
}

pub async fn apply_postgres(pool: &Pool<Postgres>) -> Result<(), RepoError> {
    let mut conn = pool.acquire().await?;
    for stmt in statements(POSTGRES_SCHEMA) {
        sqlx::query(stmt).execute(&mut *conn).await?;
    }
    Ok(())
}

fn statements(content: &str) -> impl Iterator<Item = &str> {
    content
        .split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
}
