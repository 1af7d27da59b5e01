//! Core domain types
//!
//! Resources returned by the Dotscience admin API. These are transient values
//! decoded from responses and never persisted locally.

pub mod runner;
