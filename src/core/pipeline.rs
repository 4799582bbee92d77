use crate::core::producer::RowProducer;
use crate::core::serializer::{run_serializer, JsonArrayWriter};
use crate::core::{ConfigProvider, ConvertStats, Pipeline, Record};
use crate::utils::error::{ConvertError, Result};
use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::debug;

/// Two concurrent stages joined by a single-slot hand-off channel: the row
/// producer parses lines into records, the serializer streams them into the
/// output JSON array. The producer blocks on each send until the serializer
/// has drained the slot, so at most one record is in flight.
pub struct StreamingPipeline<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> StreamingPipeline<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }
}

#[async_trait]
impl<C: ConfigProvider> Pipeline for StreamingPipeline<C> {
    async fn run(&self) -> Result<ConvertStats> {
        let output_path = self.config.output_path();
        let writer = JsonArrayWriter::create(&output_path, self.config.pretty()).await?;
        debug!("Created output file: {}", output_path.display());

        let (record_tx, record_rx) = mpsc::channel::<Record>(1);
        let (done_tx, done_rx) = oneshot::channel::<()>();

        let serializer = tokio::spawn(run_serializer(record_rx, writer, done_tx));

        let producer = RowProducer::new(
            self.config.input_path().to_path_buf(),
            self.config.separator(),
        );
        let producer = tokio::spawn(producer.run(record_tx));

        // Wait until the closing bracket is flushed. A dropped sender means the
        // serializer failed early; the join below surfaces its error.
        if done_rx.await.is_err() {
            debug!("Completion channel closed before the serializer finished");
        }

        // Serializer errors take precedence: its death also stops the producer.
        let records_written = join_task(serializer).await?;
        let producer_stats = join_task(producer).await?;

        Ok(ConvertStats {
            rows_read: producer_stats.rows_read,
            rows_skipped: producer_stats.rows_skipped,
            records_written,
        })
    }
}

async fn join_task<T>(handle: JoinHandle<Result<T>>) -> Result<T> {
    handle.await.map_err(|e| ConvertError::TaskError {
        message: e.to_string(),
    })?
}
