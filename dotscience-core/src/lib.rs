//! Dotscience Core
//!
//! Wire types shared by the Dotscience admin client and its command-line host.
//!
//! This crate contains:
//! - Domain types: Remote resources as the admin API describes them (Runner)
//! - DTOs: Request bodies sent to the admin API
//!
//! Nothing here performs I/O.

pub mod domain;
pub mod dto;
