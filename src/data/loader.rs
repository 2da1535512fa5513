use std::path::Path;

use thiserror::Error;

use super::model::{Dimension, FlightDataset, FlightRecord};

// ---------------------------------------------------------------------------
// LoadError – the only failure point in the data layer
// ---------------------------------------------------------------------------

/// Loading fails atomically: a bad path, a missing column, or a malformed
/// row aborts the whole load. Filtering and aggregation never fail.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("row {row}: {message}")]
    MalformedRow { row: usize, message: String },
}

/// Required columns, in source-file naming (`class`, not `travel_class`).
const REQUIRED_COLUMNS: [&str; 7] = [
    "airline",
    "source_city",
    "destination_city",
    "class",
    "stops",
    "duration",
    "price",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a flight dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with at least the required columns; extra columns
///             are ignored
/// * `.json` – records-oriented array, `[{ "airline": ..., ... }, ...]`
///             (the default `df.to_json(orient='records')`)
pub fn load_file(path: &Path) -> Result<FlightDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let dataset = match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }?;

    log::info!("parsed {} flight records", dataset.len());
    for &dim in &Dimension::ALL {
        log::debug!(
            "{}: {} distinct values",
            dim.column(),
            dataset.distinct(dim).len()
        );
    }
    Ok(dataset)
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<FlightDataset, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| match e.into_kind() {
        csv::ErrorKind::Io(source) => io_error(path, source),
        other => LoadError::MalformedRow {
            row: 0,
            message: format!("{other:?}"),
        },
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::MalformedRow {
            row: 0,
            message: format!("reading header: {e}"),
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn(col));
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<FlightRecord>().enumerate() {
        let record = result.map_err(|e| LoadError::MalformedRow {
            // +2: header line plus 1-based numbering
            row: row_no + 2,
            message: e.to_string(),
        })?;
        records.push(record);
    }

    Ok(FlightDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

fn load_json(path: &Path) -> Result<FlightDataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|e| io_error(path, e))?;

    // Missing keys surface as a serde error naming the field; map the
    // required ones onto MissingColumn so both loaders fail alike.
    let records: Vec<FlightRecord> =
        serde_json::from_str(&text).map_err(|e| match missing_required_field(&e.to_string()) {
            Some(col) => LoadError::MissingColumn(col),
            None => LoadError::MalformedRow {
                row: e.line(),
                message: e.to_string(),
            },
        })?;

    Ok(FlightDataset::from_records(records))
}

fn missing_required_field(message: &str) -> Option<&'static str> {
    REQUIRED_COLUMNS
        .iter()
        .find(|col| message.contains(&format!("missing field `{col}`")))
        .copied()
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn io_error(path: &Path, source: std::io::Error) -> LoadError {
    LoadError::Io {
        path: path.display().to_string(),
        source,
    }
}
