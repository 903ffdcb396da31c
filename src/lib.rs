//! Matching and advisory engine for a workforce center.
//!
//! The [`advisory`] evaluators are pure functions over a read-only
//! [`catalog`]; the CLI and HTTP surfaces in this crate only collect input
//! and render what the evaluators return.

pub mod advisory;
pub mod catalog;
pub mod config;
pub mod error;
pub mod telemetry;

mod cli;
mod demo;
mod routes;
mod server;

use error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
