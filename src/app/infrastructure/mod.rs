//! Infrastructure layer - external integrations and utilities.
//!
//! This module contains code that interfaces with the outside world:
//! - Error types
//! - Reading input from files or stdin

pub mod error;
pub mod input;
