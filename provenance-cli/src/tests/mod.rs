//! Unit tests for provenance-cli, organized by module.
//!
//! Tests are BDD-style with Given/When/Then comments and descriptive names.

mod config;
