//! Service Layer
//!
//! Business logic between the HTTP handlers and the record store.

pub mod employee;

pub use employee::{
    CreatedEmployee, DepartmentStatsResult, EmployeeService, Pagination, UpdateOutcome,
};
