//! Shared building blocks for the WebInvite workspace: configuration,
//! the core error type, route and storage constants, and small utilities.

pub mod config;
pub mod constants;
pub mod error;
pub mod util;
