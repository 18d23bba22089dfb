// Application state shared across all modules

use std::sync::Arc;

use crate::validation::DomainValidationService;

/// Application state holding the validation pipeline.
///
/// Nothing in here is mutated after startup, so it is shared behind a plain
/// `Arc` without a lock.
#[derive(Clone)]
pub struct AppState {
    pub validation_service: Arc<DomainValidationService>,
}
