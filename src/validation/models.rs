use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Query parameters for `GET /validate`
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationRequest {
    pub college_name: String,
    pub domain: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Checks {
    pub format: bool,
    pub dns: bool,
    pub name_match: bool,
}

/// Verdict returned to the caller; field order is part of the wire format
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResult {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    #[serde(rename = "workingURL")]
    pub working_url: Option<String>,
    pub title: Option<String>,
    pub similarity_score: u8,
    pub checks: Checks,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Files the failure under `errors` or `warnings` depending on severity
    pub fn record(&mut self, failure: ValidationFailure) {
        if failure.is_terminal() {
            self.errors.push(failure.to_string());
        } else {
            self.warnings.push(failure.to_string());
        }
    }
}

/// Everything that can go wrong while validating a domain.
///
/// `InvalidFormat` and `DomainNotFound` end the pipeline and land in `errors`;
/// the rest are advisory and land in `warnings`.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("Invalid domain format")]
    InvalidFormat,

    #[error("Domain does not exist")]
    DomainNotFound,

    #[error("Could not extract website title")]
    FetchFailed,

    #[error("Could not extract website title")]
    TitleMissing,

    #[error("Domain exists but title does not strongly match college name")]
    WeakMatch,
}

impl ValidationFailure {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            ValidationFailure::InvalidFormat | ValidationFailure::DomainNotFound
        )
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
