use crate::listings::DEFAULT_ITEMS_PER_PAGE;
use crate::storage::StorageKind;
use crate::transactions::{StatusPolicy, TransactionSettings};
use std::time::Duration;

/// 市场配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖（启动时先加载 `.env`）：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | MARKET_DATA_DIR | ./market_data | 数据目录 |
/// | MARKET_STORAGE | json | 存储后端: json \| redb \| memory |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 格式日志 |
/// | LOG_DIR | (unset) | 日志文件目录，未设置则只输出到终端 |
/// | LISTING_ACK_DELAY_MS | 1500 | 发布商品后的确认延迟(毫秒)，0 关闭 |
/// | STATUS_POLICY | strict | 订单状态规则: strict \| permissive |
/// | BUYER_NAME | You | 买家显示名 |
/// | SELLER_NAME | Your Store | 新商品的卖家名 |
/// | ITEMS_PER_PAGE | 8 | 每页商品数 |
///
/// # 示例
///
/// ```ignore
/// MARKET_STORAGE=redb MARKET_DATA_DIR=/tmp/market marketplace listings
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 数据目录，存放 JSON 文件或 redb 数据库
    pub data_dir: String,
    pub storage: StorageKind,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    /// 模拟网络延迟
    pub listing_ack_delay_ms: u64,
    pub status_policy: StatusPolicy,
    pub buyer_name: String,
    pub seller_name: String,
    pub items_per_page: usize,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        Self {
            data_dir: std::env::var("MARKET_DATA_DIR").unwrap_or_else(|_| "./market_data".into()),
            storage: std::env::var("MARKET_STORAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_dir: std::env::var("LOG_DIR").ok().filter(|v| !v.is_empty()),
            listing_ack_delay_ms: std::env::var("LISTING_ACK_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1500),
            status_policy: std::env::var("STATUS_POLICY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or_default(),
            buyer_name: std::env::var("BUYER_NAME").unwrap_or_else(|_| "You".into()),
            seller_name: std::env::var("SELLER_NAME").unwrap_or_else(|_| "Your Store".into()),
            items_per_page: std::env::var("ITEMS_PER_PAGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|n: &usize| *n > 0)
                .unwrap_or(DEFAULT_ITEMS_PER_PAGE),
        }
    }

    /// 测试用配置：内存存储，无延迟，不读环境变量
    pub fn for_tests() -> Self {
        Self {
            data_dir: String::new(),
            storage: StorageKind::Memory,
            log_level: "debug".into(),
            log_json: false,
            log_dir: None,
            listing_ack_delay_ms: 0,
            status_policy: StatusPolicy::Strict,
            buyer_name: "You".into(),
            seller_name: "Your Store".into(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
        }
    }

    pub fn listing_ack_delay(&self) -> Duration {
        Duration::from_millis(self.listing_ack_delay_ms)
    }

    pub fn transaction_settings(&self) -> TransactionSettings {
        TransactionSettings {
            buyer_name: self.buyer_name.clone(),
            policy: self.status_policy,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
