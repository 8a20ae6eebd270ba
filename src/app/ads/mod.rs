//! 分类广告模块

pub mod catalog;
pub mod cli;
pub mod handler;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use handler::AppState;
pub use model::{Ad, AdSummary, NewAd};
pub use service::{AdError, AdService};
pub use store::{AdStore, InMemoryAdStore, SAMPLE_CAP};
