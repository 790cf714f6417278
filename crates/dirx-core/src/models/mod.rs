//! Data models: directory records and pipeline configuration.

pub mod config;
pub mod record;
