use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Column separator applied to every line of the input, header included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    #[default]
    Comma,
    Semicolon,
}

impl Separator {
    pub fn as_char(&self) -> char {
        match self {
            Separator::Comma => ',',
            Separator::Semicolon => ';',
        }
    }
}

impl std::fmt::Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Separator::Comma => write!(f, "comma"),
            Separator::Semicolon => write!(f, "semicolon"),
        }
    }
}

/// One parsed data row: header name -> raw cell text, in header order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl Record {
    /// Zip field values positionally against the header list.
    ///
    /// Callers must have checked that `fields.len() == headers.len()`.
    pub fn from_fields(headers: &[String], fields: Vec<String>) -> Self {
        let mut data = Map::with_capacity(headers.len());
        for (name, value) in headers.iter().zip(fields) {
            data.insert(name.clone(), Value::String(value));
        }
        Self { data }
    }
}

/// Counters reported by the row producer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProducerStats {
    pub rows_read: usize,
    pub rows_skipped: usize,
}

/// Summary of a completed conversion run.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertStats {
    pub rows_read: usize,
    pub rows_skipped: usize,
    pub records_written: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_chars() {
        assert_eq!(Separator::Comma.as_char(), ',');
        assert_eq!(Separator::Semicolon.as_char(), ';');
        assert_eq!(Separator::default(), Separator::Comma);
    }

    #[test]
    fn test_record_keeps_header_order() {
        let headers = vec!["COL1".to_string(), "COL2".to_string(), "COL3".to_string()];
        let record = Record::from_fields(
            &headers,
            vec!["1".to_string(), "2".to_string(), "3".to_string()],
        );

        let keys: Vec<&String> = record.data.keys().collect();
        assert_eq!(keys, vec!["COL1", "COL2", "COL3"]);
        assert_eq!(record.data.get("COL2").unwrap().as_str().unwrap(), "2");
    }

    #[test]
    fn test_record_serializes_flat() {
        let headers = vec!["COL1".to_string(), "COL2".to_string()];
        let record = Record::from_fields(&headers, vec!["a".to_string(), "b".to_string()]);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"COL1":"a","COL2":"b"}"#);
    }
}
