//! Application layer containing the core business logic orchestration.
//!
//! This module defines the `StationEngine` which acts as the primary entry
//! point for running a session script against a pay station.

pub mod engine;
