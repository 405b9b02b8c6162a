pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::cli::LocalStorage;
pub use crate::config::toml_config::TomlConfig;

pub use crate::core::{engine::ReportEngine, pipeline::ReportPipeline};
pub use crate::domain::model::{AvailabilityRecord, InputDocument, OutputDocument};
pub use crate::utils::error::{ReportError, Result};
