//! # Validation Module
//!
//! This module answers one question: does the claimed organization plausibly
//! own the domain it gave us? It covers:
//! - Domain format and DNS checks (terminal on failure)
//! - Homepage title retrieval
//! - Fuzzy matching of the title against the claimed name (advisory only)

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;


pub use routes::validation_routes;
pub use services::DomainValidationService;
