//! Scanwatch Core
//!
//! Core types and the polling engine for watching remote scans.
//!
//! This crate contains:
//! - Domain types: Scan identifiers, observations and outcomes
//! - DTOs: Payloads exchanged with the remote scan service
//! - Service seam: The `ScanService` trait implemented by transports
//! - Probe: Classification of a single status query
//! - Polling: The state machine that decides when a scan is done
//! - Session: Gate, start and watch composed into one flow

pub mod domain;
pub mod dto;
pub mod error;
pub mod polling;
pub mod probe;
pub mod service;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;

pub use domain::observation::Observation;
pub use domain::outcome::{Outcome, PollingReport};
pub use domain::scan::ScanId;
pub use error::{ConfigError, SessionError};
pub use polling::{PollingConfig, PollingStateMachine};
pub use probe::StatusProbe;
pub use service::ScanService;
pub use session::ScanSession;
