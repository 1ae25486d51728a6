//! SurrealDB store tests against an embedded engine
//!
//! Run: cargo test -p employee-server --test surreal_store

use employee_server::db;
use employee_server::db::models::{EmployeeRecord, EmployeeUpdate};
use employee_server::db::store::{
    DuplicateField, EmployeeStore, StoreError, SurrealEmployeeStore,
};

async fn store(dir: &tempfile::TempDir) -> SurrealEmployeeStore {
    let endpoint = format!("rocksdb://{}", dir.path().join("employees.db").display());
    let db = db::connect(&endpoint, "company", "employees", 5000)
        .await
        .unwrap();
    SurrealEmployeeStore::init(db).await.unwrap()
}

fn record(
    employee_id: &str,
    name: &str,
    email: &str,
    department: &str,
    salary: f64,
    skills: &[&str],
    joining_date: &str,
) -> EmployeeRecord {
    EmployeeRecord {
        employee_id: employee_id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        position: "Engineer".to_string(),
        salary,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        joining_date: joining_date.to_string(),
        is_active: true,
        created_at: "2024-01-01T00:00:00.000Z".to_string(),
        updated_at: "2024-01-01T00:00:00.000Z".to_string(),
    }
}

#[tokio::test]
async fn insert_find_update_delete_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir).await;

    let original = record(
        "E001",
        "Ada",
        "ada@mail.com",
        "Engineering",
        90000.0,
        &["Rust"],
        "2023-01-15",
    );
    store.insert(original.clone()).await.unwrap();

    let found = store.find_by_id("E001").await.unwrap().unwrap();
    assert_eq!(found, original);
    assert!(store.find_by_id("E999").await.unwrap().is_none());

    let patch = EmployeeUpdate {
        position: Some("Staff Engineer".into()),
        salary: Some(95000.0),
        ..Default::default()
    }
    .into_patch();
    assert_eq!(store.update_one("E001", &patch).await.unwrap(), 1);
    assert_eq!(store.update_one("E999", &patch).await.unwrap(), 0);

    let updated = store.find_by_id("E001").await.unwrap().unwrap();
    assert_eq!(updated.position, "Staff Engineer");
    assert_eq!(updated.salary, 95000.0);
    assert_eq!(updated.name, "Ada");
    assert_eq!(updated.updated_at, patch.updated_at);

    assert_eq!(store.delete_one("E001").await.unwrap(), 1);
    assert_eq!(store.delete_one("E001").await.unwrap(), 0);
}

#[tokio::test]
async fn unique_indexes_type_the_duplicate() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir).await;

    store
        .insert(record(
            "E001",
            "Ada",
            "ada@mail.com",
            "Engineering",
            90000.0,
            &[],
            "2023-01-15",
        ))
        .await
        .unwrap();

    let err = store
        .insert(record(
            "E001",
            "Eve",
            "eve@mail.com",
            "Engineering",
            90000.0,
            &[],
            "2023-01-15",
        ))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Duplicate(DuplicateField::EmployeeId)
    ));

    let err = store
        .insert(record(
            "E002",
            "Eve",
            "ada@mail.com",
            "Engineering",
            90000.0,
            &[],
            "2023-01-15",
        ))
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(DuplicateField::Email)));
}

#[tokio::test]
async fn find_by_email_can_exclude_a_record() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir).await;

    store
        .insert(record(
            "E001",
            "Ada",
            "ada@mail.com",
            "Engineering",
            90000.0,
            &[],
            "2023-01-15",
        ))
        .await
        .unwrap();

    assert!(
        store
            .find_by_email("ada@mail.com", None)
            .await
            .unwrap()
            .is_some()
    );
    assert!(
        store
            .find_by_email("ada@mail.com", Some("E001"))
            .await
            .unwrap()
            .is_none()
    );
    assert!(
        store
            .find_by_email("ada@mail.com", Some("E002"))
            .await
            .unwrap()
            .is_some()
    );
}

#[tokio::test]
async fn pagination_sorts_by_joining_date_descending() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir).await;

    for (id, email, dept, date) in [
        ("E001", "a@mail.com", "Engineering", "2023-01-01"),
        ("E002", "b@mail.com", "HR", "2023-02-01"),
        ("E003", "c@mail.com", "Engineering", "2023-03-01"),
    ] {
        store
            .insert(record(id, id, email, dept, 50000.0, &[], date))
            .await
            .unwrap();
    }

    let (page, total) = store.find_page(None, 2, 0).await.unwrap();
    assert_eq!(total, 3);
    assert_eq!(page.len(), 2);
    assert_eq!(page[0].employee_id, "E003");
    assert_eq!(page[1].employee_id, "E002");

    let (page, total) = store.find_page(None, 2, 2).await.unwrap();
    assert_eq!(total, 3);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].employee_id, "E001");

    // Case-insensitive department filter
    let (page, total) = store.find_page(Some("ENGINEERING"), 20, 0).await.unwrap();
    assert_eq!(total, 2);
    assert!(page.iter().all(|r| r.department == "Engineering"));
}

#[tokio::test]
async fn skill_search_is_exact_case_insensitive_sorted_by_name() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir).await;

    for (id, name, email, skills) in [
        ("E001", "Zoe", "z@mail.com", &["Python", "SQL"][..]),
        ("E002", "Ada", "a@mail.com", &["python"][..]),
        ("E003", "Eve", "e@mail.com", &["Python3"][..]),
    ] {
        store
            .insert(record(id, name, email, "Engineering", 50000.0, skills, "2023-01-01"))
            .await
            .unwrap();
    }

    let hits = store.search_by_skill("Python").await.unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].name, "Ada");
    assert_eq!(hits[1].name, "Zoe");
}

#[tokio::test]
async fn aggregation_groups_and_rounds_per_department() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir).await;

    for (id, email, dept, salary) in [
        ("E001", "a@mail.com", "Eng", 100000.0),
        ("E002", "b@mail.com", "Eng", 60000.0),
        ("E003", "c@mail.com", "HR", 50000.0),
    ] {
        store
            .insert(record(id, id, email, dept, salary, &[], "2023-01-01"))
            .await
            .unwrap();
    }

    let averages = store.average_salary_by_department().await.unwrap();
    assert_eq!(averages.len(), 2);
    assert_eq!(averages[0].department, "Eng");
    assert_eq!(averages[0].avg_salary, 80000.0);
    assert_eq!(averages[1].department, "HR");
    assert_eq!(averages[1].avg_salary, 50000.0);

    let stats = store.department_statistics().await.unwrap();
    assert_eq!(stats.len(), 2);
    let eng = &stats[0];
    assert_eq!(eng.department, "Eng");
    assert_eq!(eng.employee_count, 2);
    assert_eq!(eng.average_salary, 80000.0);
    assert_eq!(eng.min_salary, 60000.0);
    assert_eq!(eng.max_salary, 100000.0);
    assert_eq!(eng.total_salary, 160000.0);
}
