//! Integration test utilities for the roster API
//!
//! Helpers for driving the router in-process and over a real socket.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
