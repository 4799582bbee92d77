use crate::core::{ConvertStats, Pipeline};
use crate::utils::error::Result;

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<ConvertStats> {
        println!("Writing JSON file...");

        let stats = self.pipeline.run().await?;

        tracing::info!(
            "Converted {} data rows ({} records written, {} skipped)",
            stats.rows_read,
            stats.records_written,
            stats.rows_skipped
        );
        println!("Completed!");

        Ok(stats)
    }
}
