use crate::core::Record;
use crate::domain::model::{ProducerStats, Separator};
use crate::utils::error::{ConvertError, Result};
use std::path::PathBuf;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// Reads the input file line by line and emits one [`Record`] per well-formed
/// data row. The sender is dropped when the input is exhausted, which is the
/// end-of-sequence signal for the serializer.
pub struct RowProducer {
    path: PathBuf,
    separator: Separator,
}

impl RowProducer {
    pub fn new(path: PathBuf, separator: Separator) -> Self {
        Self { path, separator }
    }

    /// Consume the input file and feed records into `tx`.
    ///
    /// Fatal: the file cannot be opened, or yields no header line. Rows with a
    /// mismatched column count are reported and skipped, never fatal.
    pub async fn run(self, tx: mpsc::Sender<Record>) -> Result<ProducerStats> {
        let file = File::open(&self.path).await?;
        let mut lines = BufReader::new(file).lines();

        let header_line =
            lines
                .next_line()
                .await?
                .ok_or_else(|| ConvertError::InvalidInput {
                    message: "missing header line".to_string(),
                })?;
        let headers = split_line(&header_line, self.separator);
        debug!("Parsed {} header columns: {:?}", headers.len(), headers);

        let mut stats = ProducerStats::default();
        let mut line_no = 1usize;

        while let Some(line) = lines.next_line().await? {
            line_no += 1;
            stats.rows_read += 1;

            match process_line(&headers, &line, self.separator) {
                Ok(record) => {
                    if tx.send(record).await.is_err() {
                        // Serializer is gone; its error surfaces from the coordinator.
                        debug!("Record channel closed, stopping at line {}", line_no);
                        break;
                    }
                }
                Err(e) => {
                    stats.rows_skipped += 1;
                    warn!("Skipping line {}: {} ({})", line_no, e, line);
                }
            }
        }

        Ok(stats)
    }
}

// Naive split: no quoting or escaping support. Only the line terminator is
// stripped before splitting, so field text is otherwise untouched.
fn split_line(line: &str, separator: Separator) -> Vec<String> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    line.split(separator.as_char())
        .map(str::to_string)
        .collect()
}

/// Split a raw data line and zip it against the header list.
pub(crate) fn process_line(
    headers: &[String],
    raw_line: &str,
    separator: Separator,
) -> Result<Record> {
    let fields = split_line(raw_line, separator);

    if fields.len() != headers.len() {
        return Err(ConvertError::ProcessingError {
            message: format!(
                "line has {} fields, header has {} columns",
                fields.len(),
                headers.len()
            ),
        });
    }

    Ok(Record::from_fields(headers, fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn write_csv(content: &str) -> NamedTempFile {
        let mut tmpfile = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        tmpfile.write_all(content.as_bytes()).unwrap();
        tmpfile.flush().unwrap();
        tmpfile
    }

    async fn collect_records(
        path: PathBuf,
        separator: Separator,
    ) -> (Vec<Record>, Result<ProducerStats>) {
        let (tx, mut rx) = mpsc::channel(16);
        let producer = RowProducer::new(path, separator);
        let handle = tokio::spawn(producer.run(tx));

        let mut records = Vec::new();
        while let Some(record) = rx.recv().await {
            records.push(record);
        }
        (records, handle.await.unwrap())
    }

    #[test]
    fn test_process_line_zips_fields() {
        let headers = headers(&["COL1", "COL2", "COL3"]);
        let record = process_line(&headers, "1,2,3", Separator::Comma).unwrap();

        assert_eq!(record.data.len(), 3);
        assert_eq!(record.data.get("COL1").unwrap().as_str().unwrap(), "1");
        assert_eq!(record.data.get("COL3").unwrap().as_str().unwrap(), "3");
    }

    #[test]
    fn test_process_line_rejects_mismatched_count() {
        let headers = headers(&["COL1", "COL2", "COL3"]);

        let err = process_line(&headers, "1,2", Separator::Comma).unwrap_err();
        assert!(matches!(err, ConvertError::ProcessingError { .. }));

        let err = process_line(&headers, "1,2,3,4", Separator::Comma).unwrap_err();
        assert!(matches!(err, ConvertError::ProcessingError { .. }));
    }

    #[test]
    fn test_process_line_strips_carriage_return() {
        let headers = headers(&["COL1", "COL2"]);
        let record = process_line(&headers, "a,b\r", Separator::Comma).unwrap();
        assert_eq!(record.data.get("COL2").unwrap().as_str().unwrap(), "b");
    }

    #[tokio::test]
    async fn test_producer_emits_records_in_order() {
        let tmpfile = write_csv("COL1,COL2,COL3\n1,2,3\n4,5,6\n");

        let (records, stats) =
            collect_records(tmpfile.path().to_path_buf(), Separator::Comma).await;
        let stats = stats.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].data.get("COL1").unwrap().as_str().unwrap(), "1");
        assert_eq!(records[1].data.get("COL1").unwrap().as_str().unwrap(), "4");
        assert_eq!(stats.rows_read, 2);
        assert_eq!(stats.rows_skipped, 0);
    }

    #[tokio::test]
    async fn test_producer_semicolon_separator() {
        let tmpfile = write_csv("COL1;COL2;COL3\n1;2;3\n");

        let (records, stats) =
            collect_records(tmpfile.path().to_path_buf(), Separator::Semicolon).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].data.get("COL2").unwrap().as_str().unwrap(), "2");
        assert_eq!(stats.unwrap().rows_read, 1);
    }

    #[tokio::test]
    async fn test_producer_skips_malformed_rows() {
        let tmpfile = write_csv("COL1,COL2,COL3\n1,2,3\n4,5\n6,7,8\n");

        let (records, stats) =
            collect_records(tmpfile.path().to_path_buf(), Separator::Comma).await;
        let stats = stats.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].data.get("COL1").unwrap().as_str().unwrap(), "1");
        assert_eq!(records[1].data.get("COL1").unwrap().as_str().unwrap(), "6");
        assert_eq!(stats.rows_read, 3);
        assert_eq!(stats.rows_skipped, 1);
    }

    #[tokio::test]
    async fn test_producer_header_only_input() {
        let tmpfile = write_csv("COL1,COL2\n");

        let (records, stats) =
            collect_records(tmpfile.path().to_path_buf(), Separator::Comma).await;
        let stats = stats.unwrap();

        assert!(records.is_empty());
        assert_eq!(stats.rows_read, 0);
    }

    #[tokio::test]
    async fn test_producer_empty_file_is_invalid_input() {
        let tmpfile = write_csv("");

        let (records, result) =
            collect_records(tmpfile.path().to_path_buf(), Separator::Comma).await;

        assert!(records.is_empty());
        assert!(matches!(
            result.unwrap_err(),
            ConvertError::InvalidInput { .. }
        ));
    }

    #[tokio::test]
    async fn test_producer_missing_file_is_io_error() {
        let (_, result) =
            collect_records(PathBuf::from("nowhere/missing.csv"), Separator::Comma).await;
        assert!(matches!(result.unwrap_err(), ConvertError::IoError(_)));
    }

    #[tokio::test]
    async fn test_producer_crlf_input() {
        let tmpfile = write_csv("COL1,COL2\r\na,b\r\n");

        let (records, _) = collect_records(tmpfile.path().to_path_buf(), Separator::Comma).await;

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].data.get("COL1").unwrap().as_str().unwrap(), "a");
        assert_eq!(records[0].data.get("COL2").unwrap().as_str().unwrap(), "b");
    }
}
