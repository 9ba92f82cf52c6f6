mod common;

use std::collections::HashSet;
use std::time::Duration;

use customer_server::models::Customer;
use customer_server::repo::CustomerRepo;
use customer_server::seed;
use futures::TryStreamExt;

fn name_age_set(rows: &[Customer]) -> HashSet<(String, i32)> {
    rows.iter().map(|c| (c.name.clone(), c.age)).collect()
}

fn expected() -> HashSet<(String, i32)> {
    [("raj", 25), ("david", 27), ("pam", 30)]
        .into_iter()
        .map(|(n, a)| (n.to_string(), a))
        .collect()
}

#[test]
fn seed_rows_pair_names_with_ages() {
    let rows = seed::seed_customers();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|c| c.id.is_none()));
    assert_eq!(name_age_set(&rows), expected());
}

#[tokio::test]
async fn seeding_empty_table_yields_fixed_dataset() {
    let repo = common::memory_repo().await;

    let rows = seed::run(repo.as_ref(), Duration::ZERO).await.unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|c| c.id.is_some()));
    assert_eq!(name_age_set(&rows), expected());

    let stored: Vec<Customer> = repo.find_all().try_collect().await.unwrap();
    assert_eq!(name_age_set(&stored), expected());
}

#[tokio::test]
async fn seeding_replaces_existing_rows() {
    let repo = common::memory_repo().await;
    repo.save(Customer::new("stale", 99)).await.unwrap();

    let rows = seed::run(repo.as_ref(), Duration::from_millis(1)).await.unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(name_age_set(&rows), expected());
}

#[tokio::test]
async fn startup_task_creates_table_and_seeds() {
    let repo = common::memory_repo().await;

    seed::spawn_startup(repo.clone(), Some(Duration::ZERO)).await.unwrap();

    let stored: Vec<Customer> = repo.find_all().try_collect().await.unwrap();
    assert_eq!(name_age_set(&stored), expected());
}

#[tokio::test]
async fn startup_task_without_seed_leaves_rows_alone() {
    let repo = common::memory_repo().await;
    repo.save(Customer::new("kept", 40)).await.unwrap();

    seed::spawn_startup(repo.clone(), None).await.unwrap();

    let stored: Vec<Customer> = repo.find_all().try_collect().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].name, "kept");
}
