//! 工具模块 - 日志与 id 生成

pub mod ids;
pub mod logger;

pub use ids::IdGenerator;
