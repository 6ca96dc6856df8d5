//! Application layer.
//!
//! # Structure
//!
//! - `domain/` - Core data structures (Operation, TextStats, AppSettings)
//! - `services/` - Business operations (text_ops, export)
//! - `infrastructure/` - External integrations (input, error)
//! - `state.rs` - Input/output workspace the front end drives

pub mod domain;
pub mod infrastructure;
pub mod services;
pub mod state;

// Re-exports for convenient external access
pub use domain::{AppSettings, CleanOptions, Operation, TextStats, ThemeChoice};
pub use infrastructure::error::{AppError, Result};
pub use state::Workspace;
