// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::AppConfig;
pub use error::ApiError;
pub use state::AppState;
