//! Core types and trait definitions for the HRMS record store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it.

pub mod attendance;
pub mod employee;
pub mod error;
pub mod store;
pub mod summary;
pub mod validate;

pub use error::{Classify, Error, ErrorKind, Result};
