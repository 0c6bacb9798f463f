//! Common test utilities and helpers
//!
//! - Application and server fixtures backed by the in-memory store
//! - Optional PostgreSQL fixture, enabled by `DATABASE_URL`
//! - Custom assertion macros

#![allow(dead_code, unused_macros, unused_imports)]

pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use assertions::*;
pub use auth_helpers::*;
pub use database::*;
