use crate::core::Record;
use crate::utils::error::Result;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

/// Incremental JSON array writer owning the output file handle.
///
/// Lifecycle: `create` truncates the file and writes the opening bracket,
/// `write_record` appends one object per call, `finish` writes the closing
/// bracket and flushes. There is no way back to writing after `finish`;
/// finishing with zero records produces a valid empty array.
pub struct JsonArrayWriter {
    writer: BufWriter<File>,
    pretty: bool,
    first: bool,
}

impl JsonArrayWriter {
    pub async fn create(path: &Path, pretty: bool) -> Result<Self> {
        let file = File::create(path).await?;
        let mut writer = BufWriter::new(file);
        writer.write_all(b"[").await?;
        if pretty {
            writer.write_all(b"\n").await?;
        }
        Ok(Self {
            writer,
            pretty,
            first: true,
        })
    }

    pub async fn write_record(&mut self, record: &Record) -> Result<()> {
        if !self.first {
            let separator: &[u8] = if self.pretty { b",\n" } else { b"," };
            self.writer.write_all(separator).await?;
        }
        self.first = false;

        let fragment = if self.pretty {
            indent(&serde_json::to_string_pretty(record)?)
        } else {
            serde_json::to_string(record)?
        };
        self.writer.write_all(fragment.as_bytes()).await?;
        Ok(())
    }

    pub async fn finish(mut self) -> Result<()> {
        if self.pretty && !self.first {
            self.writer.write_all(b"\n").await?;
        }
        self.writer.write_all(b"]").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

// Shift a pretty-printed object one level so it sits inside the array.
fn indent(body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 64);
    for (i, line) in body.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str("  ");
        out.push_str(line);
    }
    out
}

/// Drain the record channel into the writer in arrival order, close the array
/// once the channel closes, then signal completion. Returns the number of
/// records written.
pub async fn run_serializer(
    mut rx: mpsc::Receiver<Record>,
    mut writer: JsonArrayWriter,
    done_tx: oneshot::Sender<()>,
) -> Result<usize> {
    let mut written = 0usize;

    while let Some(record) = rx.recv().await {
        writer.write_record(&record).await?;
        written += 1;
    }

    writer.finish().await?;
    debug!("Serializer wrote {} records", written);

    // Completion is signalled only after the closing bracket is flushed.
    let _ = done_tx.send(());
    Ok(written)
}
