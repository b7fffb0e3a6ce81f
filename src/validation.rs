use once_cell::sync::Lazy;
use regex::Regex;
use rustrict::CensorStr;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::chore::{Audience, Role};
use crate::constants::{MAX_CHORE_TITLE_LENGTH, MAX_DISPLAY_NAME_LENGTH};

static DISPLAY_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 _-]*$").unwrap());

/// Chore titles are rendered on the wheel and read aloud to children, so
/// they must be printable and clean.
pub fn validate_chore_title(title: &str) -> Result<(), ValidationError> {
    let trimmed = title.trim();
    if trimmed.is_empty() || trimmed.chars().count() > MAX_CHORE_TITLE_LENGTH {
        return Err(ValidationError::new("invalid_chore_title"));
    }
    if trimmed.chars().any(char::is_control) {
        return Err(ValidationError::new("invalid_chore_title"));
    }
    if trimmed.is_inappropriate() {
        return Err(ValidationError::new("inappropriate_chore_title"));
    }
    Ok(())
}

pub fn validate_display_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() > MAX_DISPLAY_NAME_LENGTH || !DISPLAY_NAME_RE.is_match(name) {
        return Err(ValidationError::new("invalid_display_name"));
    }
    if name.is_inappropriate() {
        return Err(ValidationError::new("inappropriate_display_name"));
    }
    Ok(())
}

pub fn validate_weight(weight: f64) -> Result<(), ValidationError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(ValidationError::new("invalid_weight"));
    }
    Ok(())
}

/// A chore as entered by an adult, validated before it is sent to the
/// household service.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct ChoreDraft {
    #[validate(custom = "validate_chore_title")]
    pub title: String,
    #[validate(range(min = 1, max = 240))]
    pub minutes: u32,
    #[validate(range(min = 1))]
    pub points: i32,
    pub audience: Audience,
    #[validate(custom = "validate_weight")]
    pub weight: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct MemberDraft {
    #[validate(custom = "validate_display_name")]
    pub display_name: String,
    pub role: Role,
}
