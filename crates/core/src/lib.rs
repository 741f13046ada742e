//! Domain core for biological-material storage monitoring.
//!
//! Pure evaluation logic (scoring, zoning, notification and audit text) plus
//! the [`condition_service::ConditionService`] orchestrator and the
//! collaborator traits it is wired against. Zero I/O of its own.

pub mod audit;
pub mod condition;
pub mod condition_service;
pub mod environment;
pub mod error;
pub mod hazard;
pub mod memory;
pub mod pagination;
pub mod ports;
pub mod types;
pub mod validation;
pub mod zone;
