//! One-shot startup seeding of the `customer` table.
use std::sync::Arc;
use std::time::Duration;

use futures::TryStreamExt;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::models::Customer;
use crate::repo::{CustomerRepo, RepoError};

const SEED_NAMES: [&str; 3] = ["raj", "david", "pam"];
const SEED_AGES: [i32; 3] = [25, 27, 30];

/// Names and ages paired by position, none persisted yet.
pub fn seed_customers() -> Vec<Customer> {
    SEED_NAMES
        .iter()
        .zip(SEED_AGES)
        .map(|(name, age)| Customer::new(*name, age))
        .collect()
}

/// Clears the table, inserts the seed rows one by one with `delay` before
/// each insert, then reads the whole table back.
pub async fn run(repo: &dyn CustomerRepo, delay: Duration) -> Result<Vec<Customer>, RepoError> {
    info!("seeding data");
    let removed = repo.delete_all().await?;
    info!(removed, "customer table cleared");

    for customer in seed_customers() {
        tokio::time::sleep(delay).await;
        let saved = repo.save(customer).await?;
        info!(id = ?saved.id, name = %saved.name, "seed customer inserted");
    }

    let rows: Vec<Customer> = repo.find_all().try_collect().await?;
    for row in &rows {
        info!(id = ?row.id, name = %row.name, age = row.age, "customer");
    }
    Ok(rows)
}

/// Startup work on its own task: create the table, then seed it when
/// `seed_delay` is set. The HTTP server never waits on it, and failures are
/// only logged.
pub fn spawn_startup(repo: Arc<dyn CustomerRepo>, seed_delay: Option<Duration>) -> JoinHandle<()> {
    tokio::spawn(async move {
        if let Err(e) = repo.ensure_schema().await {
            error!(error = %e, "customer table bootstrap failed");
            return;
        }

        let Some(delay) = seed_delay else {
            return;
        };

        if let Err(e) = run(repo.as_ref(), delay).await {
            error!(error = %e, "seeding failed");
        }
    })
}
