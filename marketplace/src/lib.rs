//! Marketplace - 二手市场的商品与订单状态核心
//!
//! # 架构概述
//!
//! - **商品** (`listings`): 商品目录、库存扣减、搜索/排序/分页
//! - **订单** (`transactions`): 购买、状态流转、单步撤销
//! - **存储** (`storage`): JSON 文件 / redb / 内存三种后端
//! - **通知** (`notify`): 操作结果的提示消息
//!
//! # 模块结构
//!
//! ```text
//! marketplace/src/
//! ├── core/          # 配置、应用上下文、错误
//! ├── listings/      # 商品存储与视图
//! ├── transactions/  # 订单存储
//! ├── storage/       # 持久化后端
//! ├── notify/        # 通知
//! ├── utils/         # ID 生成、日志
//! ├── seed.rs        # 首次运行的种子数据
//! └── cli.rs         # 命令行
//! ```

pub mod cli;
pub mod core;
pub mod listings;
pub mod notify;
pub mod seed;
pub mod storage;
pub mod transactions;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, MarketError, Marketplace, Result};
pub use listings::{ListingError, ListingStore, Page, SearchFilters, SortOption};
pub use notify::{Notification, Notifier, RecordingNotifier, TracingNotifier};
pub use storage::{Repository, StorageError, StorageKind};
pub use transactions::{StatusPolicy, TransactionError, TransactionStore, TransactionSummary};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// 设置运行环境：加载 `.env`，读取配置，初始化日志
pub fn setup_environment() -> anyhow::Result<Config> {
    dotenv::dotenv().ok();
    let config = Config::from_env();
    init_logger_with_file(&config.log_level, config.log_json, config.log_dir.as_deref())?;
    Ok(config)
}
