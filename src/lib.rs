pub mod charts;
pub mod common;
pub mod config;
pub mod data_loader;
pub mod database;
pub mod errors;
pub mod services;

#[cfg(feature = "server")]
pub mod server;
