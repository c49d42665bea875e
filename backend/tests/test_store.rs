// backend/tests/test_store.rs

mod common;

use std::collections::HashSet;

use salary_report_api::db::{Store, StoreError};

#[tokio::test]
async fn join_keeps_every_employee_once() {
    let fx = common::seeded().await;
    let store = Store::new(&fx.url).unwrap();

    let view = store.fetch_employee_view().await.unwrap();
    assert_eq!(view.len(), common::EMPLOYEE_ROWS);

    let ids: HashSet<i64> = view.iter().map(|r| r.employee_id).collect();
    assert_eq!(ids.len(), view.len());
}

#[tokio::test]
async fn count_matches_distinct_ids_in_view() {
    let fx = common::seeded().await;
    let store = Store::new(&fx.url).unwrap();

    let count = store.count_distinct_employees().await.unwrap();
    let view = store.fetch_employee_view().await.unwrap();
    let ids: HashSet<i64> = view.iter().map(|r| r.employee_id).collect();
    assert_eq!(count as usize, ids.len());
}

#[tokio::test]
async fn view_rows_carry_joined_fields() {
    let fx = common::seeded().await;
    let view = Store::new(&fx.url).unwrap().fetch_employee_view().await.unwrap();

    let grace = view.iter().find(|r| r.employee_id == 1).unwrap();
    assert_eq!(grace.full_name.as_deref(), Some("Grace Hopper"));
    assert_eq!(grace.office_id.as_deref(), Some("1"));
    assert_eq!(grace.yearly_compensation, Some(100.0));
    assert_eq!(grace.country.as_deref(), Some("US"));

    let ada = view.iter().find(|r| r.employee_id == 3).unwrap();
    assert_eq!(ada.yearly_compensation, Some(50.5));

    let unpaid = view.iter().find(|r| r.employee_id == 4).unwrap();
    assert_eq!(unpaid.yearly_compensation, None);
    assert_eq!(unpaid.country.as_deref(), Some("US"));

    let unmapped = view.iter().find(|r| r.employee_id == 5).unwrap();
    assert_eq!(unmapped.country, None);
    assert_eq!(unmapped.office_id.as_deref(), Some("9"));
}

#[tokio::test]
async fn empty_side_tables_still_list_employees() {
    let statements: Vec<&str> = common::SCHEMA
        .iter()
        .copied()
        .chain(["INSERT INTO Employee VALUES (7, 'Barbara', 'Liskov', 'Eng', 3)"])
        .collect();
    let fx = common::database(&statements).await;

    let view = Store::new(&fx.url).unwrap().fetch_employee_view().await.unwrap();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].yearly_compensation, None);
    assert_eq!(view[0].country, None);
}

#[tokio::test]
async fn missing_file_is_a_connection_error() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("absent.db").display());
    let store = Store::new(&url).unwrap();

    assert!(matches!(store.count_distinct_employees().await, Err(StoreError::Connection(_))));
    assert!(matches!(store.fetch_employee_view().await, Err(StoreError::Connection(_))));
    // read-only store must not have created the file
    assert!(!dir.path().join("absent.db").exists());
}

#[tokio::test]
async fn missing_table_is_a_schema_error() {
    let fx = common::database(&common::SCHEMA[..1]).await;
    let store = Store::new(&fx.url).unwrap();

    assert!(matches!(store.fetch_employee_view().await, Err(StoreError::Schema(_))));
    // Employee itself exists, so the count still works
    assert_eq!(store.count_distinct_employees().await.unwrap(), 0);
}

#[tokio::test]
async fn text_office_ids_join_and_decode() {
    let fx = common::database(&[
        "CREATE TABLE Employee (EmployeeId INTEGER PRIMARY KEY, FirstName TEXT, LastName TEXT, JobTitle TEXT, OfficeId TEXT)",
        "CREATE TABLE Salary (EmployeeId INTEGER, YearlyCompensation REAL)",
        "CREATE TABLE OfficeCountryMapping (OfficeId TEXT PRIMARY KEY, Country TEXT)",
        "INSERT INTO OfficeCountryMapping VALUES ('NYC', 'US')",
        "INSERT INTO Employee VALUES (1, 'Grace', 'Hopper', 'Eng', 'NYC'), (2, 'Alan', 'Turing', 'Eng', NULL)",
    ])
    .await;
    let store = Store::new(&fx.url).unwrap();

    let view = store.fetch_employee_view().await.unwrap();
    assert_eq!(view.len(), 2);
    assert_eq!(view[0].office_id.as_deref(), Some("NYC"));
    assert_eq!(view[0].country.as_deref(), Some("US"));
    assert_eq!(view[1].office_id, None);
    assert_eq!(view[1].country, None);
    assert_eq!(store.count_distinct_employees().await.unwrap(), 2);
}

#[tokio::test]
async fn missing_name_part_leaves_full_name_null() {
    let statements: Vec<&str> = common::SCHEMA
        .iter()
        .copied()
        .chain(["INSERT INTO Employee VALUES (8, 'Cher', NULL, 'Vocals', 1)"])
        .collect();
    let fx = common::database(&statements).await;

    let view = Store::new(&fx.url).unwrap().fetch_employee_view().await.unwrap();
    assert_eq!(view[0].first_name.as_deref(), Some("Cher"));
    assert_eq!(view[0].last_name, None);
    assert_eq!(view[0].full_name, None);
}
