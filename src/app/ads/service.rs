//! 广告业务服务

use std::sync::Arc;

use chrono::Utc;
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::{
    model::{Ad, AdSummary, NewAd},
    store::{AdStore, SAMPLE_CAP},
    validation::{validate_new_ad, AdValidationError},
};

/// 业务错误，不包含任何传输层状态码
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdError {
    #[error("an ad with title {title} already exists")]
    AlreadyExists { title: String },
    #[error(transparent)]
    InvalidData(#[from] AdValidationError),
    #[error("ad with id {id} not found")]
    NotFound { id: String },
}

#[derive(Clone)]
pub struct AdService {
    store: Arc<dyn AdStore>,
}

impl AdService {
    pub fn new(store: Arc<dyn AdStore>) -> Self {
        Self { store }
    }

    /// 创建广告
    ///
    /// 检查顺序：标题是否已存在 → 数据校验 → 持久化。
    /// 标题检查与写入不在同一把锁内，并发创建同名广告可能都成功。
    pub fn create_ad(&self, new_ad: NewAd) -> Result<AdSummary, AdError> {
        if !self.store.find_by_title(&new_ad.title).is_empty() {
            warn!(title = %new_ad.title, "rejecting ad with duplicate title");
            return Err(AdError::AlreadyExists {
                title: new_ad.title,
            });
        }

        if let Err(err) = validate_new_ad(&new_ad) {
            warn!(title = %new_ad.title, error = %err, "rejecting invalid ad data");
            return Err(err.into());
        }

        let ad = self.store.insert(Ad {
            id: Uuid::new_v4().to_string(),
            title: new_ad.title,
            description: new_ad.description,
            price: new_ad.price,
            created_at: Utc::now(),
        });
        info!(id = %ad.id, title = %ad.title, price = ad.price, "ad created");

        Ok(ad.into())
    }

    pub fn get_ad(&self, id: &str) -> Result<AdSummary, AdError> {
        match self.store.find_by_id(id) {
            Some(ad) => Ok(ad.into()),
            None => {
                debug!(id, "ad not found");
                Err(AdError::NotFound { id: id.to_string() })
            }
        }
    }

    /// 返回至多 [`SAMPLE_CAP`] 条广告，保持存储层给出的顺序
    pub fn list_ads(&self) -> Vec<AdSummary> {
        self.store
            .list_sample(SAMPLE_CAP)
            .into_iter()
            .map(AdSummary::from)
            .collect()
    }
}
