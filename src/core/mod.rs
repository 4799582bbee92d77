pub mod engine;
pub mod pipeline;
pub mod producer;
pub mod serializer;

pub use crate::domain::model::{ConvertStats, ProducerStats, Record, Separator};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
