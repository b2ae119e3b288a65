//! Core domain types
//!
//! This module contains the structures the polling engine reasons about.
//! They are shared between the transport (which produces raw status values)
//! and the CLI (which reports outcomes).

pub mod observation;
pub mod outcome;
pub mod scan;
