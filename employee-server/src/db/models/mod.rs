//! Data Models
//!
//! Document shapes for the employee collection.

pub mod employee;

pub use employee::{EmployeeCreate, EmployeePatch, EmployeeRecord, EmployeeUpdate};
