//! HTTP surface for the batch sorting executors.

pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod payload;
