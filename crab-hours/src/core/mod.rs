//! Core - configuration and environment bootstrap

pub mod config;

pub use config::Config;
