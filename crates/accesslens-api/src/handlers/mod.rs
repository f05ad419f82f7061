//! HTTP handlers for the accesslens API.

pub mod analytics;
pub mod import;
pub mod providers;
pub mod risk_analysis;
pub mod search;
pub mod users;
