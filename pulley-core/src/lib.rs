//! Pulley core types
//!
//! Wire types for the CI API, shared between the HTTP client and the CLI.

pub mod job;
