//! Record Store
//!
//! Thin façade over the employee collection. [`EmployeeStore`] is the seam the
//! service talks through; the SurrealDB implementation is the primary backend
//! and [`MemoryEmployeeStore`] is the demo fallback used when the document
//! store is unreachable at startup.

pub mod memory;
pub mod surreal;

pub use memory::MemoryEmployeeStore;
pub use surreal::SurrealEmployeeStore;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::db::models::{EmployeePatch, EmployeeRecord};
use crate::utils::AppError;

/// Which unique constraint a duplicate hit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateField {
    EmployeeId,
    Email,
    Unknown,
}

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Duplicate key: {0:?}")]
    Duplicate(DuplicateField),

    #[error("Store error: {0}")]
    Database(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate(DuplicateField::EmployeeId) => AppError::duplicate(
                "Employee with this ID already exists",
                "Duplicate employee ID",
            ),
            StoreError::Duplicate(DuplicateField::Email) => AppError::duplicate(
                "Employee with this email already exists",
                "Duplicate email address",
            ),
            StoreError::Duplicate(DuplicateField::Unknown) => AppError::duplicate(
                "Employee with this ID or email already exists",
                "Duplicate key error",
            ),
            StoreError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Active backend, reported on the health endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    /// Document store (SurrealDB)
    Primary,
    /// In-process demo map
    Fallback,
}

impl StoreMode {
    pub fn is_fallback(&self) -> bool {
        matches!(self, StoreMode::Fallback)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreMode::Primary => "surrealdb",
            StoreMode::Fallback => "in-memory (demo mode)",
        }
    }
}

/// Per-department statistics row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentStatistics {
    pub department: String,
    pub average_salary: f64,
    pub employee_count: u64,
    pub total_salary: f64,
    pub min_salary: f64,
    pub max_salary: f64,
}

/// Per-department rounded average salary row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentAverage {
    pub department: String,
    pub avg_salary: f64,
}

/// Store contract for the employee collection
///
/// Uniqueness of `employee_id` and `email` is enforced by every
/// implementation; `insert` and `update_one` surface violations as
/// [`StoreError::Duplicate`].
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// Exact-match lookup by employee id.
    async fn find_by_id(&self, employee_id: &str) -> StoreResult<Option<EmployeeRecord>>;

    /// Lookup by (already lower-cased) email, optionally excluding one record.
    async fn find_by_email(
        &self,
        email: &str,
        exclude_id: Option<&str>,
    ) -> StoreResult<Option<EmployeeRecord>>;

    /// One page of records sorted by `joining_date` descending, plus the
    /// total count for the same filter. Department matching is
    /// case-insensitive exact.
    async fn find_page(
        &self,
        department: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> StoreResult<(Vec<EmployeeRecord>, u64)>;

    /// Insert a canonical record.
    async fn insert(&self, record: EmployeeRecord) -> StoreResult<()>;

    /// Merge a partial update into the record with the given id.
    /// Returns the matched count (0 when no such record exists).
    async fn update_one(&self, employee_id: &str, patch: &EmployeePatch) -> StoreResult<u64>;

    /// Hard delete. Returns the deleted count.
    async fn delete_one(&self, employee_id: &str) -> StoreResult<u64>;

    /// Case-insensitive exact match against any element of `skills`,
    /// sorted by `name` ascending.
    async fn search_by_skill(&self, skill: &str) -> StoreResult<Vec<EmployeeRecord>>;

    /// Grouped statistics per department, sorted by department name.
    async fn department_statistics(&self) -> StoreResult<Vec<DepartmentStatistics>>;

    /// Rounded average salary per department, sorted by department name.
    async fn average_salary_by_department(&self) -> StoreResult<Vec<DepartmentAverage>>;

    fn mode(&self) -> StoreMode;
}
