//! Employee API Handlers
//!
//! Thin translation layer: query/body extraction, pagination clamping, and
//! mapping service results onto response bodies. Error mapping lives entirely
//! in [`AppError`]'s `IntoResponse` impl.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{EmployeeCreate, EmployeeRecord, EmployeeUpdate};
use crate::db::store::{DepartmentAverage, DepartmentStatistics};
use crate::services::Pagination;
use crate::utils::{AppError, AppResult};

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 100;

// ============================================================================
// Query Parameters
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub department: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub skill: Option<String>,
}

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct ListResponse {
    pub employees: Vec<EmployeeRecord>,
    pub pagination: Pagination,
}

#[derive(Serialize)]
pub struct CreateResponse {
    pub message: &'static str,
    pub employee_id: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub employees: Vec<EmployeeRecord>,
    pub search_term: String,
    pub count: usize,
}

#[derive(Serialize)]
pub struct StatsResponse {
    pub statistics: Vec<DepartmentStatistics>,
    pub total_departments: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<&'static str>,
}

// ============================================================================
// Handlers
// ============================================================================

/// GET /employees/ - list with optional department filter and pagination
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<ListResponse>> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT) as u32;
    let offset = query.offset.unwrap_or(0).clamp(0, i64::from(u32::MAX)) as u32;
    let department = query
        .department
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());

    let (employees, pagination) = state.service.list(department, limit, offset).await?;
    Ok(Json(ListResponse {
        employees,
        pagination,
    }))
}

/// POST /employees/ - create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<CreateResponse>)> {
    let created = state.service.create(payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(CreateResponse {
            message: created.message,
            employee_id: created.employee_id,
        }),
    ))
}

/// GET /employees/{employee_id}/ - fetch one employee
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<EmployeeRecord>> {
    let employee = state.service.get(&employee_id).await?;
    Ok(Json(employee))
}

/// PUT /employees/{employee_id}/ - partial update
pub async fn update(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<MessageResponse>> {
    let outcome = state.service.update(&employee_id, payload).await?;
    Ok(Json(MessageResponse {
        message: outcome.message(),
    }))
}

/// DELETE /employees/{employee_id}/ - hard delete
pub async fn delete(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.service.delete(&employee_id).await?;
    Ok(Json(MessageResponse {
        message: "Employee deleted successfully",
    }))
}

/// GET /employees/search/?skill=X - case-insensitive exact skill match
pub async fn search_by_skill(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<SearchResponse>> {
    let skill = query
        .skill
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::BadRequest {
            message: "Skill parameter is required".to_string(),
            example: Some("/employees/search/?skill=Python".to_string()),
        })?
        .to_string();

    let employees = state.service.search_by_skill(&skill).await?;
    Ok(Json(SearchResponse {
        count: employees.len(),
        employees,
        search_term: skill,
    }))
}

/// GET /employees/avg-salary/ - rounded average salary per department
pub async fn average_salary(
    State(state): State<ServerState>,
) -> AppResult<Json<Vec<DepartmentAverage>>> {
    let averages = state.service.average_salary_by_department().await?;
    Ok(Json(averages))
}

/// GET /employees/department-stats/ - full per-department statistics
pub async fn department_statistics(
    State(state): State<ServerState>,
) -> AppResult<Json<StatsResponse>> {
    let result = state.service.department_statistics().await?;
    Ok(Json(StatsResponse {
        total_departments: result.statistics.len(),
        statistics: result.statistics,
        message: result.message,
    }))
}
