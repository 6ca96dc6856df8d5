//! Domain layer - core data structures and types.
//!
//! This module contains the fundamental domain models:
//! - Operations that can be applied to text
//! - Text statistics
//! - Application settings

pub mod operation;
pub mod settings;
pub mod stats;

pub use operation::{CleanOptions, Operation};
pub use settings::{AppSettings, ThemeChoice};
pub use stats::TextStats;
