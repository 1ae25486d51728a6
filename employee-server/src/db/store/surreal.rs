//! SurrealDB Store
//!
//! Primary [`EmployeeStore`] backend. Queries are pass-through SurrealQL; the
//! grouped statistics use the engine's native aggregation (`GROUP BY` +
//! `math::*`), mirroring what the store would do server-side anyway.

use async_trait::async_trait;
use serde::Deserialize;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use super::{
    DepartmentAverage, DepartmentStatistics, DuplicateField, EmployeeStore, StoreError, StoreMode,
    StoreResult,
};
use crate::db::models::{EmployeePatch, EmployeeRecord};

const TABLE: &str = "employee";

/// Unique index names, matched against error messages to type duplicates.
pub const INDEX_EMPLOYEE_ID: &str = "idx_employee_id";
pub const INDEX_EMAIL: &str = "idx_employee_email";

/// Table and index definitions, applied idempotently at startup.
const SCHEMA: &str = "
    DEFINE TABLE IF NOT EXISTS employee SCHEMALESS;
    DEFINE INDEX IF NOT EXISTS idx_employee_id ON TABLE employee COLUMNS employee_id UNIQUE;
    DEFINE INDEX IF NOT EXISTS idx_employee_email ON TABLE employee COLUMNS email UNIQUE;
    DEFINE INDEX IF NOT EXISTS idx_employee_department ON TABLE employee COLUMNS department;
    DEFINE INDEX IF NOT EXISTS idx_employee_skills ON TABLE employee COLUMNS skills;
    DEFINE INDEX IF NOT EXISTS idx_employee_joining_date ON TABLE employee COLUMNS joining_date;
";

#[derive(Clone)]
pub struct SurrealEmployeeStore {
    db: Surreal<Any>,
}

#[derive(Debug, Deserialize)]
struct CountRow {
    total: u64,
}

impl SurrealEmployeeStore {
    /// Wrap a connected database handle and bootstrap the schema.
    pub async fn init(db: Surreal<Any>) -> StoreResult<Self> {
        db.query(SCHEMA).await?.check()?;
        Ok(Self { db })
    }
}

impl From<surrealdb::Error> for StoreError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        if msg.contains(INDEX_EMPLOYEE_ID) {
            StoreError::Duplicate(DuplicateField::EmployeeId)
        } else if msg.contains(INDEX_EMAIL) {
            StoreError::Duplicate(DuplicateField::Email)
        } else if msg.contains("already contains") {
            StoreError::Duplicate(DuplicateField::Unknown)
        } else {
            StoreError::Database(msg)
        }
    }
}

#[async_trait]
impl EmployeeStore for SurrealEmployeeStore {
    async fn find_by_id(&self, employee_id: &str) -> StoreResult<Option<EmployeeRecord>> {
        let mut result = self
            .db
            .query("SELECT * OMIT id FROM employee WHERE employee_id = $employee_id LIMIT 1")
            .bind(("employee_id", employee_id.to_string()))
            .await?;
        let records: Vec<EmployeeRecord> = result.take(0)?;
        Ok(records.into_iter().next())
    }

    async fn find_by_email(
        &self,
        email: &str,
        exclude_id: Option<&str>,
    ) -> StoreResult<Option<EmployeeRecord>> {
        let mut result = match exclude_id {
            Some(exclude) => {
                self.db
                    .query(
                        "SELECT * OMIT id FROM employee \
                         WHERE email = $email AND employee_id != $exclude LIMIT 1",
                    )
                    .bind(("email", email.to_string()))
                    .bind(("exclude", exclude.to_string()))
                    .await?
            }
            None => {
                self.db
                    .query("SELECT * OMIT id FROM employee WHERE email = $email LIMIT 1")
                    .bind(("email", email.to_string()))
                    .await?
            }
        };
        let records: Vec<EmployeeRecord> = result.take(0)?;
        Ok(records.into_iter().next())
    }

    async fn find_page(
        &self,
        department: Option<&str>,
        limit: u32,
        offset: u32,
    ) -> StoreResult<(Vec<EmployeeRecord>, u64)> {
        // limit/offset are already clamped server-side values; inlining them
        // sidesteps parameter restrictions in LIMIT/START clauses.
        let mut result = match department {
            Some(dept) => {
                let page = format!(
                    "SELECT * OMIT id FROM employee \
                     WHERE string::lowercase(department) = $department \
                     ORDER BY joining_date DESC LIMIT {limit} START {offset}"
                );
                self.db
                    .query(page)
                    .query(
                        "SELECT count() AS total FROM employee \
                         WHERE string::lowercase(department) = $department GROUP ALL",
                    )
                    .bind(("department", dept.to_lowercase()))
                    .await?
            }
            None => {
                let page = format!(
                    "SELECT * OMIT id FROM employee \
                     ORDER BY joining_date DESC LIMIT {limit} START {offset}"
                );
                self.db
                    .query(page)
                    .query("SELECT count() AS total FROM employee GROUP ALL")
                    .await?
            }
        };

        let employees: Vec<EmployeeRecord> = result.take(0)?;
        let count: Option<CountRow> = result.take(1)?;
        Ok((employees, count.map(|c| c.total).unwrap_or(0)))
    }

    async fn insert(&self, record: EmployeeRecord) -> StoreResult<()> {
        let _created: Option<EmployeeRecord> = self.db.create(TABLE).content(record).await?;
        Ok(())
    }

    async fn update_one(&self, employee_id: &str, patch: &EmployeePatch) -> StoreResult<u64> {
        let mut result = self
            .db
            .query("UPDATE employee MERGE $patch WHERE employee_id = $employee_id")
            .bind(("patch", patch.clone()))
            .bind(("employee_id", employee_id.to_string()))
            .await?;
        let updated: Vec<EmployeeRecord> = result.take(0)?;
        Ok(updated.len() as u64)
    }

    async fn delete_one(&self, employee_id: &str) -> StoreResult<u64> {
        let mut result = self
            .db
            .query("DELETE employee WHERE employee_id = $employee_id RETURN BEFORE")
            .bind(("employee_id", employee_id.to_string()))
            .await?;
        let deleted: Vec<EmployeeRecord> = result.take(0)?;
        Ok(deleted.len() as u64)
    }

    async fn search_by_skill(&self, skill: &str) -> StoreResult<Vec<EmployeeRecord>> {
        let mut result = self
            .db
            .query(
                "SELECT * OMIT id FROM employee \
                 WHERE $skill IN array::map(skills, |$s| string::lowercase($s)) \
                 ORDER BY name ASC",
            )
            .bind(("skill", skill.to_lowercase()))
            .await?;
        let records: Vec<EmployeeRecord> = result.take(0)?;
        Ok(records)
    }

    async fn department_statistics(&self) -> StoreResult<Vec<DepartmentStatistics>> {
        let mut result = self
            .db
            .query(
                "SELECT department, \
                     math::fixed(math::mean(salary), 2) AS average_salary, \
                     count() AS employee_count, \
                     math::sum(salary) AS total_salary, \
                     math::min(salary) AS min_salary, \
                     math::max(salary) AS max_salary \
                 FROM employee GROUP BY department ORDER BY department ASC",
            )
            .await?;
        let statistics: Vec<DepartmentStatistics> = result.take(0)?;
        Ok(statistics)
    }

    async fn average_salary_by_department(&self) -> StoreResult<Vec<DepartmentAverage>> {
        let mut result = self
            .db
            .query(
                "SELECT department, math::round(math::mean(salary)) AS avg_salary \
                 FROM employee GROUP BY department ORDER BY department ASC",
            )
            .await?;
        let averages: Vec<DepartmentAverage> = result.take(0)?;
        Ok(averages)
    }

    fn mode(&self) -> StoreMode {
        StoreMode::Primary
    }
}
