//! 核心模块 - 配置、应用上下文和错误定义
//!
//! # 模块结构
//!
//! - [`Config`] - 环境变量配置
//! - [`Marketplace`] - 应用上下文，持有两个存储
//! - [`MarketError`] - 应用层错误

pub mod config;
pub mod context;
pub mod error;

pub use config::Config;
pub use context::Marketplace;
pub use error::{MarketError, Result};
