//! In-Memory Store
//!
//! Explicit fallback implementation of [`EmployeeStore`], selected when the
//! document store is unreachable at startup (or forced via configuration).
//! Keeps records in a map keyed by `employee_id` and observes the same
//! uniqueness invariants as the primary backend. The statistics operations
//! degrade to empty results in this mode; the service layer attaches the
//! explanatory message.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{
    DepartmentAverage, DepartmentStatistics, DuplicateField, EmployeeStore, StoreError, StoreMode,
    StoreResult,
};
use crate::db::models::{EmployeePatch, EmployeeRecord};
use crate::utils::time;

pub struct MemoryEmployeeStore {
    records: RwLock<BTreeMap<String, EmployeeRecord>>,
}

impl MemoryEmployeeStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
        }
    }

    /// Store seeded with a small fixed dataset, so the API has something to
    /// serve without a running document store.
    pub fn with_demo_data() -> Self {
        let store = Self::new();
        {
            let mut records = store.records.write();
            for record in demo_employees() {
                records.insert(record.employee_id.clone(), record);
            }
        }
        store
    }
}

impl Default for MemoryEmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}

fn demo_employee(
    employee_id: &str,
    name: &str,
    email: &str,
    department: &str,
    position: &str,
    salary: f64,
    skills: &[&str],
    joining_date: &str,
) -> EmployeeRecord {
    let now = time::now_iso();
    EmployeeRecord {
        employee_id: employee_id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        department: department.to_string(),
        position: position.to_string(),
        salary,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        joining_date: joining_date.to_string(),
        is_active: true,
        created_at: now.clone(),
        updated_at: now,
    }
}

fn demo_employees() -> Vec<EmployeeRecord> {
    vec![
        demo_employee(
            "E123",
            "John Doe",
            "john.doe@company.com",
            "Engineering",
            "Software Engineer",
            75000.0,
            &["Python", "Django", "MongoDB"],
            "2023-01-15",
        ),
        demo_employee(
            "E124",
            "Jane Smith",
            "jane.smith@company.com",
            "Engineering",
            "Frontend Developer",
            70000.0,
            &["JavaScript", "React", "CSS"],
            "2023-02-01",
        ),
        demo_employee(
            "E125",
            "Bob Wilson",
            "bob.wilson@company.com",
            "Product",
            "Product Manager",
            85000.0,
            &["Strategy", "Analytics", "Communication"],
            "2022-12-01",
        ),
    ]
}

#[async_trait]
impl EmployeeStore for MemoryEmployeeStore {
    async fn find_by_id(&self, employee_id: &str) -> StoreResult<Option<EmployeeRecord>> {
        Ok(self.records.read().get(employee_id).cloned())
    }

    async fn find_by_email(
        &self,
        email: &str,
        exclude_id: Option<&str>,
    ) -> StoreResult<Option<EmployeeRecord>> {
        Ok(self
            .records
            .read()
            .values()
            .find(|r| r.email == email && exclude_id.is_none_or(|id| r.employee_id != id))
            .cloned())
    }

    async fn find_page(
        &self,
        department: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> StoreResult<(Vec<EmployeeRecord>, u64)> {
        let mut matching: Vec<EmployeeRecord> = self
            .records
            .read()
            .values()
            .filter(|r| {
                department.is_none_or(|d| r.department.eq_ignore_ascii_case(d))
            })
            .cloned()
            .collect();
        let total = matching.len() as u64;

        matching.sort_by(|a, b| b.joining_date.cmp(&a.joining_date));
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn insert(&self, record: EmployeeRecord) -> StoreResult<()> {
        let mut records = self.records.write();
        if records.contains_key(&record.employee_id) {
            return Err(StoreError::Duplicate(DuplicateField::EmployeeId));
        }
        if records.values().any(|r| r.email == record.email) {
            return Err(StoreError::Duplicate(DuplicateField::Email));
        }
        records.insert(record.employee_id.clone(), record);
        Ok(())
    }

    async fn update_one(&self, employee_id: &str, patch: &EmployeePatch) -> StoreResult<u64> {
        let mut records = self.records.write();
        if let Some(email) = &patch.email
            && records
                .values()
                .any(|r| r.email == *email && r.employee_id != employee_id)
        {
            return Err(StoreError::Duplicate(DuplicateField::Email));
        }
        match records.get_mut(employee_id) {
            Some(record) => {
                patch.apply_to(record);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete_one(&self, employee_id: &str) -> StoreResult<u64> {
        Ok(u64::from(
            self.records.write().remove(employee_id).is_some(),
        ))
    }

    async fn search_by_skill(&self, skill: &str) -> StoreResult<Vec<EmployeeRecord>> {
        let mut matching: Vec<EmployeeRecord> = self
            .records
            .read()
            .values()
            .filter(|r| r.skills.iter().any(|s| s.eq_ignore_ascii_case(skill)))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(matching)
    }

    async fn department_statistics(&self) -> StoreResult<Vec<DepartmentStatistics>> {
        // Statistics are served by the document store's aggregation engine;
        // demo mode reports none rather than emulating it.
        Ok(Vec::new())
    }

    async fn average_salary_by_department(&self) -> StoreResult<Vec<DepartmentAverage>> {
        Ok(Vec::new())
    }

    fn mode(&self) -> StoreMode {
        StoreMode::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::EmployeeUpdate;

    #[tokio::test]
    async fn demo_seed_is_loaded() {
        let store = MemoryEmployeeStore::with_demo_data();
        let (page, total) = store.find_page(None, 20, 0).await.unwrap();
        assert_eq!(total, 3);
        assert_eq!(page.len(), 3);
        // Newest joining_date first
        assert_eq!(page[0].employee_id, "E124");
        assert_eq!(page[2].employee_id, "E125");
    }

    #[tokio::test]
    async fn insert_enforces_uniqueness() {
        let store = MemoryEmployeeStore::with_demo_data();
        let mut dup_id = demo_employees().remove(0);
        dup_id.email = "other@company.com".to_string();
        assert!(matches!(
            store.insert(dup_id).await,
            Err(StoreError::Duplicate(DuplicateField::EmployeeId))
        ));

        let mut dup_email = demo_employees().remove(0);
        dup_email.employee_id = "E999".to_string();
        assert!(matches!(
            store.insert(dup_email).await,
            Err(StoreError::Duplicate(DuplicateField::Email))
        ));
    }

    #[tokio::test]
    async fn department_filter_is_case_insensitive() {
        let store = MemoryEmployeeStore::with_demo_data();
        let (page, total) = store.find_page(Some("engineering"), 20, 0).await.unwrap();
        assert_eq!(total, 2);
        assert!(page.iter().all(|r| r.department == "Engineering"));
    }

    #[tokio::test]
    async fn skill_search_is_exact_and_case_insensitive() {
        let store = MemoryEmployeeStore::with_demo_data();
        let hits = store.search_by_skill("python").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].employee_id, "E123");
        // No substring matching
        assert!(store.search_by_skill("pyth").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_rejects_email_of_another_record() {
        let store = MemoryEmployeeStore::with_demo_data();
        let patch = EmployeeUpdate {
            email: Some("jane.smith@company.com".into()),
            ..Default::default()
        }
        .into_patch();
        assert!(matches!(
            store.update_one("E123", &patch).await,
            Err(StoreError::Duplicate(DuplicateField::Email))
        ));
    }

    #[tokio::test]
    async fn statistics_degrade_to_empty() {
        let store = MemoryEmployeeStore::with_demo_data();
        assert!(store.department_statistics().await.unwrap().is_empty());
        assert!(
            store
                .average_salary_by_department()
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn delete_then_delete_again() {
        let store = MemoryEmployeeStore::with_demo_data();
        assert_eq!(store.delete_one("E123").await.unwrap(), 1);
        assert_eq!(store.delete_one("E123").await.unwrap(), 0);
    }
}
