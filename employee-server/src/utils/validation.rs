//! Field validation helpers
//!
//! One pure function per rule. Each returns a bool; the caller decides which
//! error string to collect so that a single request can report every violated
//! rule at once.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

/// ASCII local part, dotted domain, TLD of at least two letters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

// ── Identifier limits ───────────────────────────────────────────────

pub const EMPLOYEE_ID_MIN_LEN: usize = 3;
pub const EMPLOYEE_ID_MAX_LEN: usize = 10;

/// Check email format.
pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Employee IDs are 3-10 ASCII alphanumeric characters.
pub fn validate_employee_id(employee_id: &str) -> bool {
    let len = employee_id.len();
    if len < EMPLOYEE_ID_MIN_LEN || len > EMPLOYEE_ID_MAX_LEN {
        return false;
    }
    employee_id.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Salaries must be finite and strictly positive.
pub fn validate_salary(salary: f64) -> bool {
    salary.is_finite() && salary > 0.0
}

/// Strict `YYYY-MM-DD` calendar date.
pub fn validate_date(date_str: &str) -> bool {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").is_ok()
}

/// Every skill must be non-empty after trimming.
pub fn validate_skills(skills: &[String]) -> bool {
    skills.iter().all(|skill| !skill.trim().is_empty())
}
