use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Dimension – one filterable categorical column
// ---------------------------------------------------------------------------

/// The five categorical columns a flight can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dimension {
    Airline,
    SourceCity,
    DestinationCity,
    TravelClass,
    Stops,
}

impl Dimension {
    /// All dimensions in sidebar display order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Airline,
        Dimension::SourceCity,
        Dimension::DestinationCity,
        Dimension::TravelClass,
        Dimension::Stops,
    ];

    /// Column name as it appears in the source file header.
    pub fn column(self) -> &'static str {
        match self {
            Dimension::Airline => "airline",
            Dimension::SourceCity => "source_city",
            Dimension::DestinationCity => "destination_city",
            Dimension::TravelClass => "class",
            Dimension::Stops => "stops",
        }
    }

    /// Human-readable label for the UI.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Airline => "Airline",
            Dimension::SourceCity => "Source city",
            Dimension::DestinationCity => "Destination city",
            Dimension::TravelClass => "Class",
            Dimension::Stops => "Stops",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// FlightRecord – one row of the dataset
// ---------------------------------------------------------------------------

/// A single flight (one row of the source table).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlightRecord {
    pub airline: String,
    pub source_city: String,
    pub destination_city: String,
    /// Source column is named `class`.
    #[serde(rename = "class")]
    pub travel_class: String,
    pub stops: String,
    /// Flight duration in hours.
    pub duration: f64,
    /// Ticket price.
    pub price: f64,
}

impl FlightRecord {
    /// The record's value on the given categorical dimension.
    pub fn dimension_value(&self, dim: Dimension) -> &str {
        match dim {
            Dimension::Airline => &self.airline,
            Dimension::SourceCity => &self.source_city,
            Dimension::DestinationCity => &self.destination_city,
            Dimension::TravelClass => &self.travel_class,
            Dimension::Stops => &self.stops,
        }
    }
}

// ---------------------------------------------------------------------------
// FlightDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed distinct-value sets per
/// dimension. Immutable after load.
#[derive(Debug, Clone)]
pub struct FlightDataset {
    /// All flights (rows), in file order.
    pub records: Vec<FlightRecord>,
    /// For each dimension the sorted set of distinct values.
    pub distinct_values: BTreeMap<Dimension, BTreeSet<String>>,
}

impl FlightDataset {
    /// Build the distinct-value indices from the loaded records.
    pub fn from_records(records: Vec<FlightRecord>) -> Self {
        let mut distinct_values: BTreeMap<Dimension, BTreeSet<String>> = Dimension::ALL
            .iter()
            .map(|&dim| (dim, BTreeSet::new()))
            .collect();

        for rec in &records {
            for (&dim, values) in distinct_values.iter_mut() {
                values.insert(rec.dimension_value(dim).to_string());
            }
        }

        FlightDataset {
            records,
            distinct_values,
        }
    }

    /// Sorted distinct values for one dimension.
    pub fn distinct(&self, dim: Dimension) -> &BTreeSet<String> {
        // from_records seeds every dimension key
        &self.distinct_values[&dim]
    }

    /// Number of flights.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
