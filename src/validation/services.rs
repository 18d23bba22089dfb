use std::sync::Arc;
use tracing::{debug, info, warn};

use super::models::{ValidationFailure, ValidationResult};
use crate::services::{
    clean_text, has_domain_format, normalize_domain, round_score, token_set_ratio, DnsResolver,
    TitleSource,
};

/// Runs the format → DNS → title → name-match pipeline for one request.
///
/// Holds no per-request state; every call builds a fresh result.
#[derive(Clone)]
pub struct DomainValidationService {
    resolver: Arc<dyn DnsResolver>,
    titles: Arc<dyn TitleSource>,
    match_threshold: u8,
}

impl DomainValidationService {
    pub fn new(
        resolver: Arc<dyn DnsResolver>,
        titles: Arc<dyn TitleSource>,
        match_threshold: u8,
    ) -> Self {
        Self {
            resolver,
            titles,
            match_threshold,
        }
    }

    pub async fn validate(&self, college_name: &str, raw_domain: &str) -> ValidationResult {
        let mut result = ValidationResult::default();

        let domain = match normalize_domain(raw_domain).filter(|d| has_domain_format(d)) {
            Some(domain) => domain,
            None => {
                warn!(input = %raw_domain, "Rejected domain with invalid format");
                result.record(ValidationFailure::InvalidFormat);
                return result;
            }
        };
        result.checks.format = true;

        if let Err(e) = self.resolver.resolve(&domain).await {
            warn!(domain = %domain, error = %e, "Domain did not resolve");
            result.record(ValidationFailure::DomainNotFound);
            return result;
        }
        result.checks.dns = true;
        result.is_valid = true;

        let outcome = self.titles.fetch_title(&domain).await;
        result.working_url = outcome.working_url;
        result.title = outcome.title;

        match result.title.as_deref() {
            Some(title) => {
                let name_clean = clean_text(college_name);
                let title_clean = clean_text(title);

                let raw_score = token_set_ratio(&name_clean, &title_clean);
                result.similarity_score = round_score(raw_score);
                debug!(domain = %domain, score = raw_score, "Scored title against name");

                if raw_score >= f64::from(self.match_threshold) {
                    result.checks.name_match = true;
                } else {
                    result.record(ValidationFailure::WeakMatch);
                }
            }
            None if result.working_url.is_some() => {
                result.record(ValidationFailure::TitleMissing);
            }
            None => {
                result.record(ValidationFailure::FetchFailed);
            }
        }

        info!(
            domain = %domain,
            is_valid = result.is_valid,
            name_match = result.checks.name_match,
            score = result.similarity_score,
            "Domain validated"
        );
        result
    }
}
