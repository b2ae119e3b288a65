//! Data Transfer Objects for the remote scan service
//!
//! Payloads returned by the service's mutations. The transport decodes the
//! wire response into these and the CLI renders them.

pub mod scan;
