pub mod fact_check_api;

// Re-export traits
pub use fact_check_api::{ FactCheckApi, HealthStatus };
