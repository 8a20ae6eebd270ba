//! 广告数据校验

use thiserror::Error;
use validator::ValidateLength;

use super::model::NewAd;

/// 标题的最小字符数
pub const MIN_TITLE_LENGTH: u64 = 1;
/// 描述允许的最大字符数
pub const MAX_DESCRIPTION_LENGTH: u64 = 50;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdValidationError {
    #[error("the ad title cannot be empty")]
    EmptyTitle,
    #[error("the ad description cannot be longer than {} characters", MAX_DESCRIPTION_LENGTH)]
    DescriptionTooLong,
}

pub fn validate_title(title: &str) -> Result<(), AdValidationError> {
    if title.validate_length(Some(MIN_TITLE_LENGTH), None, None) {
        Ok(())
    } else {
        Err(AdValidationError::EmptyTitle)
    }
}

/// 校验描述长度，按字符计数，超长时报错而不截断
pub fn validate_description(description: &str) -> Result<(), AdValidationError> {
    if description.validate_length(None, Some(MAX_DESCRIPTION_LENGTH), None) {
        Ok(())
    } else {
        Err(AdValidationError::DescriptionTooLong)
    }
}

/// 依次校验标题与描述
pub fn validate_new_ad(new_ad: &NewAd) -> Result<(), AdValidationError> {
    validate_title(&new_ad.title)?;
    validate_description(&new_ad.description)
}
