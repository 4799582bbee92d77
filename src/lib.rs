pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::{engine::ConvertEngine, pipeline::StreamingPipeline};
pub use crate::domain::model::{ConvertStats, Record, Separator};
pub use crate::utils::error::{ConvertError, Result};
