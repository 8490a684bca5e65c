//! Configuration utilities.

pub mod config;
