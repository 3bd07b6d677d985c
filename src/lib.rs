// ABOUTME: Library root for steward - deployment tracking for cluster rollouts.
// ABOUTME: The main binary is in main.rs.

pub mod config;
pub mod deploy;
pub mod diagnostics;
pub mod error;
pub mod output;
pub mod replay;
pub mod types;
