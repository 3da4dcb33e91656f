//! service-core: Shared infrastructure for the chat service workspace.
pub mod config;
pub mod error;
pub mod middleware;
pub mod observability;
