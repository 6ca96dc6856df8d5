pub mod app;
pub mod cli;

pub use app::domain::{AppSettings, CleanOptions, Operation, TextStats, ThemeChoice};
pub use app::infrastructure::error::{AppError, Result};
pub use app::services::text_ops;
pub use app::state::Workspace;
