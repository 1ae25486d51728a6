//! Employee Model
//!
//! The canonical stored document plus the create/update payloads. Validation
//! collects every violated rule so the API can report them all at once;
//! normalization (trimming, lower-casing, defaults, timestamps) happens when a
//! payload is converted into a record or patch.

use serde::{Deserialize, Serialize};

use crate::utils::time;
use crate::utils::validation;

/// Canonical employee document as stored and as returned by the API.
///
/// Internal storage identifiers never appear here; `employee_id` is the only
/// key the outside world sees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub position: String,
    pub salary: f64,
    #[serde(default)]
    pub skills: Vec<String>,
    pub joining_date: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    pub created_at: String,
    pub updated_at: String,
}

fn default_true() -> bool {
    true
}

/// Create employee payload
///
/// Required fields are `Option` on purpose: a missing field must produce an
/// itemized `"<field> is required"` error alongside any other violations, not
/// a deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeCreate {
    pub employee_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub skills: Option<Vec<String>>,
    pub joining_date: Option<String>,
    pub is_active: Option<bool>,
}

const REQUIRED_FIELDS: &[&str] = &[
    "employee_id",
    "name",
    "email",
    "department",
    "position",
    "salary",
];

impl EmployeeCreate {
    /// Validate the payload, returning every violated rule.
    ///
    /// When required fields are missing, the per-field format rules are not
    /// evaluated; the caller gets the full list of missing fields first.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for &field in REQUIRED_FIELDS {
            if self.field_missing(field) {
                errors.push(format!("{field} is required"));
            }
        }
        if !errors.is_empty() {
            return errors;
        }

        if let Some(employee_id) = &self.employee_id
            && !validation::validate_employee_id(employee_id)
        {
            errors.push("Employee ID must be alphanumeric and 3-10 characters long".to_string());
        }

        if let Some(email) = &self.email
            && !validation::validate_email(email)
        {
            errors.push("Invalid email format".to_string());
        }

        if let Some(salary) = self.salary
            && !validation::validate_salary(salary)
        {
            errors.push("Salary must be a positive number".to_string());
        }

        if let Some(skills) = &self.skills
            && !skills.is_empty()
            && !validation::validate_skills(skills)
        {
            errors.push("Skills must be a list of non-empty strings".to_string());
        }

        if let Some(joining_date) = &self.joining_date
            && !joining_date.trim().is_empty()
            && !validation::validate_date(joining_date)
        {
            errors.push("Joining date must be in YYYY-MM-DD format".to_string());
        }

        errors
    }

    fn field_missing(&self, field: &str) -> bool {
        match field {
            "employee_id" => is_blank(&self.employee_id),
            "name" => is_blank(&self.name),
            "email" => is_blank(&self.email),
            "department" => is_blank(&self.department),
            "position" => is_blank(&self.position),
            "salary" => self.salary.is_none(),
            _ => false,
        }
    }

    /// Build the canonical storage document from a validated payload.
    ///
    /// Trims `name`/`department`/`position`, lower-cases `email`, defaults
    /// `skills` to empty, `joining_date` to today and `is_active` to true,
    /// and stamps both timestamps. Callers must run [`validate`] first.
    ///
    /// [`validate`]: EmployeeCreate::validate
    pub fn into_record(self) -> EmployeeRecord {
        let now = time::now_iso();
        EmployeeRecord {
            employee_id: self.employee_id.unwrap_or_default(),
            name: trimmed(self.name),
            email: self.email.unwrap_or_default().trim().to_lowercase(),
            department: trimmed(self.department),
            position: trimmed(self.position),
            salary: self.salary.unwrap_or_default(),
            skills: self.skills.unwrap_or_default(),
            joining_date: self
                .joining_date
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(time::today_iso),
            is_active: self.is_active.unwrap_or(true),
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

fn trimmed(value: Option<String>) -> String {
    value.unwrap_or_default().trim().to_string()
}

/// Update employee payload
///
/// Only the updatable set appears here; `employee_id` and `joining_date` are
/// immutable after creation. Absent fields are left untouched in the store.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub department: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
    pub skills: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

impl EmployeeUpdate {
    /// Validate only the supplied fields, returning every violated rule.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if let Some(email) = &self.email
            && !validation::validate_email(email)
        {
            errors.push("Invalid email format".to_string());
        }

        if let Some(salary) = self.salary
            && !validation::validate_salary(salary)
        {
            errors.push("Salary must be a positive number".to_string());
        }

        if let Some(skills) = &self.skills
            && !validation::validate_skills(skills)
        {
            errors.push("Skills must be a list of non-empty strings".to_string());
        }

        errors
    }

    /// Normalize the supplied fields into a partial-update patch.
    ///
    /// Applies the same per-field normalization as create and always stamps a
    /// fresh `updated_at`.
    pub fn into_patch(self) -> EmployeePatch {
        EmployeePatch {
            name: self.name.map(|v| v.trim().to_string()),
            email: self.email.map(|v| v.trim().to_lowercase()),
            department: self.department.map(|v| v.trim().to_string()),
            position: self.position.map(|v| v.trim().to_string()),
            salary: self.salary,
            skills: self.skills,
            is_active: self.is_active,
            updated_at: time::now_iso(),
        }
    }
}

/// Normalized partial update
///
/// Serializes only the supplied fields (plus `updated_at`), so the store can
/// merge it directly into the existing document.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    pub updated_at: String,
}

impl EmployeePatch {
    /// True when every supplied field already matches the current record.
    ///
    /// `updated_at` is not part of the comparison; a no-op update leaves the
    /// stored timestamps untouched.
    pub fn matches(&self, current: &EmployeeRecord) -> bool {
        self.name.as_ref().is_none_or(|v| *v == current.name)
            && self.email.as_ref().is_none_or(|v| *v == current.email)
            && self
                .department
                .as_ref()
                .is_none_or(|v| *v == current.department)
            && self.position.as_ref().is_none_or(|v| *v == current.position)
            && self.salary.is_none_or(|v| v == current.salary)
            && self.skills.as_ref().is_none_or(|v| *v == current.skills)
            && self.is_active.is_none_or(|v| v == current.is_active)
    }

    /// Apply the patch to a record (used by the in-memory store).
    pub fn apply_to(&self, record: &mut EmployeeRecord) {
        if let Some(name) = &self.name {
            record.name = name.clone();
        }
        if let Some(email) = &self.email {
            record.email = email.clone();
        }
        if let Some(department) = &self.department {
            record.department = department.clone();
        }
        if let Some(position) = &self.position {
            record.position = position.clone();
        }
        if let Some(salary) = self.salary {
            record.salary = salary;
        }
        if let Some(skills) = &self.skills {
            record.skills = skills.clone();
        }
        if let Some(is_active) = self.is_active {
            record.is_active = is_active;
        }
        record.updated_at = self.updated_at.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_payload() -> EmployeeCreate {
        EmployeeCreate {
            employee_id: Some("EMP001".into()),
            name: Some("  Ada Lovelace  ".into()),
            email: Some("Ada.Lovelace@Company.COM".into()),
            department: Some(" Engineering ".into()),
            position: Some("Engineer".into()),
            salary: Some(90000.0),
            skills: Some(vec!["Rust".into(), "SQL".into()]),
            joining_date: Some("2023-01-15".into()),
            is_active: None,
        }
    }

    #[test]
    fn valid_payload_has_no_errors() {
        assert!(full_payload().validate().is_empty());
    }

    #[test]
    fn missing_required_fields_are_itemized_first() {
        let payload = EmployeeCreate {
            employee_id: None,
            name: Some(String::new()),
            email: Some("not-an-email".into()),
            department: Some("Eng".into()),
            position: Some("Dev".into()),
            salary: Some(1.0),
            skills: None,
            joining_date: None,
            is_active: None,
        };
        let errors = payload.validate();
        // Format rules are skipped while required fields are missing.
        assert_eq!(
            errors,
            vec!["employee_id is required", "name is required"]
        );
    }

    #[test]
    fn format_violations_are_all_reported() {
        let mut payload = full_payload();
        payload.employee_id = Some("E!".into());
        payload.email = Some("bad@@mail".into());
        payload.salary = Some(-5.0);
        payload.skills = Some(vec!["".into()]);
        payload.joining_date = Some("01/02/2023".into());
        let errors = payload.validate();
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&"Invalid email format".to_string()));
        assert!(errors.contains(&"Salary must be a positive number".to_string()));
    }

    #[test]
    fn into_record_normalizes_and_defaults() {
        let record = full_payload().into_record();
        assert_eq!(record.name, "Ada Lovelace");
        assert_eq!(record.email, "ada.lovelace@company.com");
        assert_eq!(record.department, "Engineering");
        assert_eq!(record.joining_date, "2023-01-15");
        assert!(record.is_active);
        assert_eq!(record.created_at, record.updated_at);
    }

    #[test]
    fn into_record_defaults_joining_date_to_today() {
        let mut payload = full_payload();
        payload.joining_date = None;
        let record = payload.into_record();
        assert_eq!(record.joining_date, time::today_iso());
        assert!(record.skills == vec!["Rust".to_string(), "SQL".to_string()]);
    }

    #[test]
    fn update_validates_only_supplied_fields() {
        let update = EmployeeUpdate {
            salary: Some(-1.0),
            ..Default::default()
        };
        assert_eq!(
            update.validate(),
            vec!["Salary must be a positive number"]
        );
        assert!(EmployeeUpdate::default().validate().is_empty());
    }

    #[test]
    fn patch_matches_detects_noop() {
        let record = full_payload().into_record();
        let noop = EmployeeUpdate {
            name: Some("Ada Lovelace".into()),
            email: Some("ADA.LOVELACE@company.com".into()),
            ..Default::default()
        }
        .into_patch();
        assert!(noop.matches(&record));

        let change = EmployeeUpdate {
            salary: Some(95000.0),
            ..Default::default()
        }
        .into_patch();
        assert!(!change.matches(&record));
    }

    #[test]
    fn patch_apply_merges_supplied_fields() {
        let mut record = full_payload().into_record();
        let created_at = record.created_at.clone();
        let patch = EmployeeUpdate {
            position: Some("  Staff Engineer ".into()),
            is_active: Some(false),
            ..Default::default()
        }
        .into_patch();
        patch.apply_to(&mut record);
        assert_eq!(record.position, "Staff Engineer");
        assert!(!record.is_active);
        assert_eq!(record.created_at, created_at);
        assert_eq!(record.updated_at, patch.updated_at);
    }
}
