//! Polling engine
//!
//! Decides, from a bounded sequence of status observations, when a scan is
//! done and how it ended. The evidence accumulation and termination policy
//! live in [`PollingState`], a plain synchronous value; the
//! [`PollingStateMachine`] drives it with real probes and delays.

pub mod config;
pub mod machine;
pub mod state;

pub use config::PollingConfig;
pub use machine::PollingStateMachine;
pub use state::{Phase, PollingState, Transition};
