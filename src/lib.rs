pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use crate::adapters::{GeminiClient, LocalStorage};
pub use crate::config::{Overrides, Settings};
pub use crate::core::forms::Form;
pub use crate::core::studio::{save_rendered, Studio};
pub use utils::error::{Result, StudioError};
