//! Integration tests for the mcpsetup bootstrapper

mod compose_scenarios;
mod settings;
