//! 广告数据模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 单条分类广告
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ad {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: u32,
    pub created_at: DateTime<Utc>,
}

/// 创建广告的输入，尚未分配 id 与时间戳
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAd {
    pub title: String,
    pub description: String,
    pub price: u32,
}

impl NewAd {
    pub fn new(title: impl Into<String>, description: impl Into<String>, price: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            price,
        }
    }
}

/// 对外公开的广告读取结构
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: u32,
    pub date: DateTime<Utc>,
}

impl From<Ad> for AdSummary {
    fn from(ad: Ad) -> Self {
        Self {
            id: ad.id,
            title: ad.title,
            description: ad.description,
            price: ad.price,
            date: ad.created_at,
        }
    }
}
