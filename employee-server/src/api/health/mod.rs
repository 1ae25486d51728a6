//! 健康检查接口
//!
//! # 响应示例
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "message": "Employee Management API is running",
//!   "version": "0.1.0",
//!   "store": "surrealdb",
//!   "timestamp": "2024-06-01T10:00:00.000Z"
//! }
//! ```

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::time;

/// 健康检查响应
#[derive(Serialize)]
pub struct HealthResponse {
    /// 状态 (healthy)
    status: &'static str,
    /// 说明
    message: &'static str,
    /// 版本号
    version: &'static str,
    /// 当前存储后端 (surrealdb | in-memory demo)
    store: &'static str,
    /// 服务器时间
    timestamp: String,
}

/// GET /employees/health/ - 基础健康检查
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        message: "Employee Management API is running",
        version: env!("CARGO_PKG_VERSION"),
        store: state.service.store_mode().as_str(),
        timestamp: time::now_iso(),
    })
}
