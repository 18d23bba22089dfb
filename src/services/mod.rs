// src/services/mod.rs
//
// Shared services module containing the building blocks of domain validation:
// hostname normalization and DNS, text cleanup, fuzzy scoring and title retrieval

pub mod domain;
pub mod similarity;
pub mod text;
pub mod title_fetcher;

// Re-export commonly used types for convenience
pub use domain::{has_domain_format, normalize_domain, DnsResolver, SystemResolver};
pub use similarity::{round_score, token_set_ratio};
pub use text::clean_text;
pub use title_fetcher::{FetchOutcome, TitleFetcher, TitleSource};
