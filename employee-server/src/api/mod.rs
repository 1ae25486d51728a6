//! API 路由模块
//!
//! # 结构
//!
//! - [`employees`] - 员工管理接口 (CRUD、搜索、统计)
//! - [`health`] - 健康检查 (挂载在 /employees/health/ 下)

pub mod employees;
pub mod health;

use axum::Router;

use crate::core::ServerState;

/// Assemble the full application router.
pub fn router() -> Router<ServerState> {
    employees::router()
}
