//! Employee Service
//!
//! Orchestrates validation, uniqueness checks, normalization and store calls,
//! and turns every outcome into either a typed result or an [`AppError`].
//! Nothing store-related propagates past this layer uncaught; handlers only
//! translate results to JSON.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::db::models::{EmployeeCreate, EmployeeRecord, EmployeeUpdate};
use crate::db::store::{
    DepartmentAverage, DepartmentStatistics, DuplicateField, EmployeeStore, StoreError, StoreMode,
};
use crate::utils::{AppError, AppResult};

/// Successful create result
#[derive(Debug)]
pub struct CreatedEmployee {
    pub message: &'static str,
    pub employee_id: String,
}

/// Successful update result: the store was matched, and either changed or not
#[derive(Debug)]
pub enum UpdateOutcome {
    Updated,
    NoChange,
}

impl UpdateOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            UpdateOutcome::Updated => "Employee updated successfully",
            UpdateOutcome::NoChange => "No changes made (data was identical)",
        }
    }
}

/// Pagination block returned alongside a listing page
#[derive(Debug, Serialize)]
pub struct Pagination {
    pub total: u64,
    pub limit: u32,
    pub offset: u32,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Department statistics plus the demo-mode note when degraded
pub struct DepartmentStatsResult {
    pub statistics: Vec<DepartmentStatistics>,
    pub message: Option<&'static str>,
}

const DEMO_STATS_MESSAGE: &str =
    "Document store not available. Statistics are disabled in demo mode.";

#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn EmployeeStore>) -> Self {
        Self { store }
    }

    pub fn store_mode(&self) -> StoreMode {
        self.store.mode()
    }

    /// Create a new employee.
    ///
    /// Validation reports every violated rule at once. Uniqueness of id and
    /// email is pre-checked for precise messages; a racing insert is still
    /// caught by the store's unique indexes and reported as a duplicate, not
    /// an internal error.
    pub async fn create(&self, data: EmployeeCreate) -> AppResult<CreatedEmployee> {
        let errors = data.validate();
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let employee_id = data.employee_id.clone().unwrap_or_default();
        if self.store.find_by_id(&employee_id).await?.is_some() {
            return Err(AppError::duplicate(
                "Employee with this ID already exists",
                "Duplicate employee ID",
            ));
        }

        let email = data.email.as_deref().unwrap_or_default().trim().to_lowercase();
        if self.store.find_by_email(&email, None).await?.is_some() {
            return Err(AppError::duplicate(
                "Employee with this email already exists",
                "Duplicate email address",
            ));
        }

        self.store.insert(data.into_record()).await?;
        info!(employee_id = %employee_id, "Employee created");

        let message = if self.store.mode().is_fallback() {
            "Employee created successfully (demo mode)"
        } else {
            "Employee created successfully"
        };
        Ok(CreatedEmployee {
            message,
            employee_id,
        })
    }

    /// Exact-match lookup; the record never carries storage identifiers.
    pub async fn get(&self, employee_id: &str) -> AppResult<EmployeeRecord> {
        self.store
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| AppError::not_found(employee_id))
    }

    /// Partial update.
    ///
    /// Distinguishes not-found, no-op (patch identical to the current values;
    /// the record is left untouched, timestamps included) and updated.
    pub async fn update(
        &self,
        employee_id: &str,
        data: EmployeeUpdate,
    ) -> AppResult<UpdateOutcome> {
        let errors = data.validate();
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        let current = self
            .store
            .find_by_id(employee_id)
            .await?
            .ok_or_else(|| AppError::not_found(employee_id))?;

        let patch = data.into_patch();

        if let Some(email) = &patch.email
            && self
                .store
                .find_by_email(email, Some(employee_id))
                .await?
                .is_some()
        {
            return Err(duplicate_update_email());
        }

        if patch.matches(&current) {
            return Ok(UpdateOutcome::NoChange);
        }

        let matched = self
            .store
            .update_one(employee_id, &patch)
            .await
            .map_err(|e| match e {
                StoreError::Duplicate(DuplicateField::Email | DuplicateField::Unknown) => {
                    duplicate_update_email()
                }
                other => other.into(),
            })?;
        if matched == 0 {
            return Err(AppError::not_found(employee_id));
        }

        info!(employee_id = %employee_id, "Employee updated");
        Ok(UpdateOutcome::Updated)
    }

    /// Hard delete by id.
    pub async fn delete(&self, employee_id: &str) -> AppResult<()> {
        let deleted = self.store.delete_one(employee_id).await?;
        if deleted == 0 {
            return Err(AppError::not_found(employee_id));
        }
        info!(employee_id = %employee_id, "Employee deleted");
        Ok(())
    }

    /// One page of employees, newest `joining_date` first.
    pub async fn list(
        &self,
        department: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> AppResult<(Vec<EmployeeRecord>, Pagination)> {
        let (employees, total) = self.store.find_page(department, limit, offset).await?;
        debug!(
            count = employees.len(),
            department = department.unwrap_or("<all>"),
            "Listed employees"
        );

        let pagination = Pagination {
            total,
            limit,
            offset,
            has_next: u64::from(offset) + u64::from(limit) < total,
            has_previous: offset > 0,
        };
        Ok((employees, pagination))
    }

    /// Employees holding the given skill (case-insensitive exact match).
    pub async fn search_by_skill(&self, skill: &str) -> AppResult<Vec<EmployeeRecord>> {
        let employees = self.store.search_by_skill(skill).await?;
        debug!(skill = %skill, count = employees.len(), "Searched employees by skill");
        Ok(employees)
    }

    /// Grouped per-department statistics, sorted by department name.
    pub async fn department_statistics(&self) -> AppResult<DepartmentStatsResult> {
        let statistics = self.store.department_statistics().await?;
        let message = self
            .store
            .mode()
            .is_fallback()
            .then_some(DEMO_STATS_MESSAGE);
        Ok(DepartmentStatsResult {
            statistics,
            message,
        })
    }

    /// Rounded average salary per department, sorted by department name.
    pub async fn average_salary_by_department(&self) -> AppResult<Vec<DepartmentAverage>> {
        Ok(self.store.average_salary_by_department().await?)
    }
}

fn duplicate_update_email() -> AppError {
    AppError::duplicate(
        "Email already exists for another employee",
        "Duplicate email address",
    )
}
