pub mod app;
pub mod client;
pub mod config;
pub mod controller;
pub mod error;
pub mod models;
pub mod ui;

// Re-export key functions for convenience
pub use app::{init_tracing, run_app};
