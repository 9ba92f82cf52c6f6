use serde::{Deserialize, Serialize};

/// A row of the `customer` table.
///
/// `id` is `None` until the row has been persisted; `save` uses it to pick
/// between insert and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub age: i32,
}

impl Customer {
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            id: None,
            name: name.into(),
            age,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct FindQuery {
    pub name: String,
    pub age: i32,
}
