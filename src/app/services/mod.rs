//! Services layer - business operations and utilities.
//!
//! This module contains business logic and operations:
//! - Text operations
//! - Output export

pub mod export;
pub mod text_ops;
