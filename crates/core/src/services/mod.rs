pub mod historical_service;
pub mod rate_cache;
pub mod refresh_service;
pub mod valuation_service;
