//! HTTP API handlers for the import gateway

pub mod health;
pub mod import;

pub use health::health_routes;
pub use import::{import_record, method_not_allowed};
