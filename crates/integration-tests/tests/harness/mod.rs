//! Shared test harness
//!
//! Each test binary pulls in the whole module, so not every helper is
//! used everywhere.
#![allow(dead_code)]

pub mod config;
pub mod mock_completions;
pub mod server;
pub mod store;
