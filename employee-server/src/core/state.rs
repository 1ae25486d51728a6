use std::sync::Arc;

use crate::core::Config;
use crate::db;
use crate::db::store::{EmployeeStore, MemoryEmployeeStore, SurrealEmployeeStore};
use crate::services::EmployeeService;
use crate::utils::AppError;

/// 服务器状态 - 持有配置与注入的存储句柄
///
/// 使用 Arc 实现浅拷贝；存储句柄由进程入口构造并注入，
/// 服务层不感知具体后端。
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 员工服务 (内部持有 Arc<dyn EmployeeStore>)
    pub service: EmployeeService,
}

impl ServerState {
    /// 创建服务器状态 (显式注入存储)
    pub fn new(config: Config, store: Arc<dyn EmployeeStore>) -> Self {
        Self {
            config,
            service: EmployeeService::new(store),
        }
    }

    /// 初始化服务器状态
    ///
    /// 优先连接文档数据库；连接失败 (超时、地址不可达) 时降级为
    /// 内存演示存储，而不是启动失败。
    pub async fn initialize(config: &Config) -> Self {
        let store = Self::open_store(config).await;
        Self::new(config.clone(), store)
    }

    async fn open_store(config: &Config) -> Arc<dyn EmployeeStore> {
        if config.force_memory_store() {
            tracing::info!("STORE_BACKEND=memory, using in-memory demo store");
            return Arc::new(MemoryEmployeeStore::with_demo_data());
        }

        match Self::connect_store(config).await {
            Ok(store) => Arc::new(store),
            Err(e) => {
                tracing::warn!(error = %e, "Document store unreachable, falling back to demo mode");
                Arc::new(MemoryEmployeeStore::with_demo_data())
            }
        }
    }

    async fn connect_store(config: &Config) -> Result<SurrealEmployeeStore, AppError> {
        // Embedded RocksDB endpoints live under work_dir
        std::fs::create_dir_all(&config.work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db = db::connect(
            &config.db_endpoint(),
            &config.db_namespace,
            &config.db_name,
            config.db_timeout_ms,
        )
        .await?;

        SurrealEmployeeStore::init(db)
            .await
            .map_err(|e| AppError::database(e.to_string()))
    }
}
