pub mod catalog_service;
pub mod health_service;
pub mod push_service;
pub mod rate_limit_service;
pub mod token_registry;
