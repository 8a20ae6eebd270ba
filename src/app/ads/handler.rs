//! 广告 HTTP 处理器

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    model::{AdSummary, NewAd},
    service::{AdError, AdService},
    validation::AdValidationError,
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub ad_service: AdService,
}

/// 创建广告请求，三个字段均为必填，拒绝多余字段
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateAdRequest {
    pub title: String,
    pub description: String,
    pub price: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AdsResponse {
    pub ads: Vec<AdSummary>,
}

impl From<AdError> for CoreError {
    fn from(err: AdError) -> Self {
        let message = err.to_string();
        match err {
            AdError::AlreadyExists { .. } => CoreError::Conflict {
                title: "ad-already-exists",
                message,
            },
            AdError::InvalidData(AdValidationError::EmptyTitle) => CoreError::BadRequest(message),
            AdError::InvalidData(AdValidationError::DescriptionTooLong) => {
                CoreError::UnprocessableEntity {
                    title: "ad-data-is-invalid",
                    message,
                }
            }
            AdError::NotFound { .. } => CoreError::NotFound {
                title: "ad-not-found",
                message,
            },
        }
    }
}

impl From<JsonRejection> for CoreError {
    fn from(rejection: JsonRejection) -> Self {
        CoreError::BadRequest(rejection.body_text())
    }
}

pub async fn create_ad(
    State(state): State<AppState>,
    payload: Result<Json<CreateAdRequest>, JsonRejection>,
) -> Result<StatusCode, CoreError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(error = %rejection, "malformed create ad request");
        CoreError::from(rejection)
    })?;

    state.ad_service.create_ad(NewAd::new(
        request.title,
        request.description,
        request.price,
    ))?;
    Ok(StatusCode::CREATED)
}

pub async fn get_ad(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AdSummary>, CoreError> {
    let ad = state.ad_service.get_ad(&id)?;
    Ok(Json(ad))
}

pub async fn list_ads(State(state): State<AppState>) -> Json<AdsResponse> {
    Json(AdsResponse {
        ads: state.ad_service.list_ads(),
    })
}
