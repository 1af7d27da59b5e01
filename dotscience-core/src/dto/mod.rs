//! Data Transfer Objects sent to the admin API

pub mod runner;
