//! CSV text to ordered rows, and back.
//!
//! Parsing is deliberately forgiving: the files are hand-maintained and the
//! dashboard must render whatever it can from them.

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("csv flush failed: {0}")]
    Flush(String),
    #[error("csv output was not utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Parse CSV text with a header row into records keyed by header name.
///
/// Source order is kept. Blank lines are skipped, short rows leave the
/// trailing fields absent and columns the record type does not name are
/// ignored. When a header repeats, the rightmost column supplies the value. Records that cannot be decoded are logged and dropped, so this
/// never fails; empty input yields no rows.
pub fn parse_rows<T: DeserializeOwned>(text: &str) -> Vec<T> {
    let text = text.trim_start_matches('\u{feff}');
    if text.trim().is_empty() {
        return Vec::new();
    }

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = match reader.headers() {
        Ok(headers) => last_wins(headers),
        Err(err) => {
            warn!(error = %err, "csv header row unreadable; treating as empty");
            return Vec::new();
        }
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = match record {
            Ok(record) => record,
            Err(err) => {
                warn!(error = %err, "skipping unreadable csv record");
                continue;
            }
        };
        if is_blank(&record) {
            continue;
        }
        match record.deserialize::<T>(Some(&headers)) {
            Ok(row) => rows.push(row),
            Err(err) => warn!(
                line = record.position().map(|p| p.line()),
                error = %err,
                "skipping undecodable csv record"
            ),
        }
    }
    rows
}

/// Serialize rows back to CSV with a header row, in order.
pub fn write_rows<T: Serialize>(rows: &[T]) -> Result<String, TableError> {
    let mut writer = WriterBuilder::new().from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| TableError::Flush(err.error().to_string()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Blank out every header that reappears further right, so serde sees each
/// name once.
fn last_wins(headers: &StringRecord) -> StringRecord {
    headers
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let repeated = headers.iter().skip(idx + 1).any(|later| later == name);
            if repeated {
                ""
            } else {
                name
            }
        })
        .collect()
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}
