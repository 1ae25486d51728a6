//! Employee Directory Server
//!
//! # 架构概述
//!
//! 管理员工档案的 HTTP 服务，核心功能：
//!
//! - **数据库** (`db`): SurrealDB 文档存储 + 内存演示降级
//! - **服务层** (`services`): 校验 → 唯一性检查 → 归一化 → 存储
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! employee-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 业务逻辑
//! ├── db/            # 存储层 (模型、SurrealDB、内存降级)
//! └── utils/         # 错误、校验、日志、时间工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use self::core::{Config, Server, ServerState};
pub use services::EmployeeService;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 设置运行环境 (dotenv + 日志)
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ╔══════════════════════════════════════╗
    ║       Employee Directory Server      ║
    ╚══════════════════════════════════════╝
    "#
    );
}
