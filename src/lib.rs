//! Mcpsetup: Local Environment Bootstrapper for Office MCP Services
//!
//! Composes the Cursor MCP configuration for the Office document services,
//! carrying over an existing third-party entry when the user already has
//! one, and verifies the Python packages the services depend on.

pub mod cli;
pub mod compose;
pub mod config;
pub mod deps;
pub mod error;
pub mod logging;
pub mod setup;
pub mod workspace;
