//! # 分类广告服务
//!
//! 一个最小的分类广告服务：创建广告、按 id 查询、列出有限数量的广告。
//! - `app`：广告的模型、存储、校验、业务服务与 HTTP 处理器
//! - `core`：错误响应与请求日志中间件
//! - `infrastructure`：配置与日志

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::router;
