/// 服务器配置 - 全部配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (嵌入式数据库、日志) |
/// | HTTP_PORT | 8000 | HTTP 服务端口 |
/// | DB_ENDPOINT | rocksdb://<WORK_DIR>/employees.db | 文档数据库地址 (rocksdb:// 或 ws://) |
/// | DB_NAMESPACE | company | SurrealDB namespace |
/// | DB_NAME | employees | SurrealDB database |
/// | DB_TIMEOUT_MS | 5000 | 连接超时 (毫秒) |
/// | STORE_BACKEND | surreal | surreal / memory (强制演示模式) |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (无) | 日志文件目录，不设置则输出到终端 |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/employees HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 文档数据库地址 (未设置时使用嵌入式 RocksDB)
    pub db_endpoint: Option<String>,
    /// SurrealDB namespace
    pub db_namespace: String,
    /// SurrealDB database
    pub db_name: String,
    /// 连接超时 (毫秒)
    pub db_timeout_ms: u64,
    /// 存储后端: surreal | memory
    pub store_backend: String,
    /// 运行环境: development | staging | production
    pub environment: String,
}

impl Config {
    /// 从环境变量加载配置，未设置的项使用默认值
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            db_endpoint: std::env::var("DB_ENDPOINT").ok(),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "company".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "employees".into()),
            db_timeout_ms: std::env::var("DB_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            store_backend: std::env::var("STORE_BACKEND").unwrap_or_else(|_| "surreal".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// 数据库地址，未显式配置时指向工作目录下的嵌入式 RocksDB
    pub fn db_endpoint(&self) -> String {
        self.db_endpoint
            .clone()
            .unwrap_or_else(|| format!("rocksdb://{}/employees.db", self.work_dir))
    }

    /// 是否强制使用内存存储 (演示模式)
    pub fn force_memory_store(&self) -> bool {
        self.store_backend.eq_ignore_ascii_case("memory")
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
