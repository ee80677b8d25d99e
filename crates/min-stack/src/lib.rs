#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Min Stack
//!
//! A LIFO stack of integers with constant-time minimum lookup.
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`config`]: Construction options loadable from TOML
//! - [`stack`]: The stack itself

pub mod config;
pub mod error;
pub mod stack;

mod proptests;

// Re-exports for convenience
pub use config::StackConfig;
pub use error::{Error, Operation, Result};
pub use stack::{MinStack, Value};
