use std::collections::{BTreeMap, BTreeSet};

use super::model::{Dimension, FlightDataset};

// ---------------------------------------------------------------------------
// FilterSelection: which distinct values are selected per dimension
// ---------------------------------------------------------------------------

/// Per-dimension selection state. Each dimension holds the set of values a
/// record may take to pass the filter.
///
/// An empty set for a dimension means "match nothing", not "match all":
/// callers express "no filtering" by selecting every distinct value, which
/// is what [`FilterSelection::matching_all`] builds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSelection {
    selected: BTreeMap<Dimension, BTreeSet<String>>,
}

impl FilterSelection {
    /// Selection that matches every record: all distinct values of every
    /// dimension are selected. Used to initialise the sidebar.
    pub fn matching_all(dataset: &FlightDataset) -> Self {
        FilterSelection {
            selected: Dimension::ALL
                .iter()
                .map(|&dim| (dim, dataset.distinct(dim).clone()))
                .collect(),
        }
    }

    /// Selection that matches nothing (all five sets empty).
    pub fn matching_none() -> Self {
        FilterSelection {
            selected: Dimension::ALL
                .iter()
                .map(|&dim| (dim, BTreeSet::new()))
                .collect(),
        }
    }

    /// The selected values for one dimension.
    pub fn values(&self, dim: Dimension) -> &BTreeSet<String> {
        static EMPTY: BTreeSet<String> = BTreeSet::new();
        self.selected.get(&dim).unwrap_or(&EMPTY)
    }

    pub fn contains(&self, dim: Dimension, value: &str) -> bool {
        self.values(dim).contains(value)
    }

    /// Replace the whole selected set for one dimension.
    pub fn set_values(&mut self, dim: Dimension, values: BTreeSet<String>) {
        self.selected.insert(dim, values);
    }

    /// Toggle a single value in a dimension's selected set.
    pub fn toggle(&mut self, dim: Dimension, value: &str) {
        let set = self.selected.entry(dim).or_default();
        if !set.remove(value) {
            set.insert(value.to_string());
        }
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of records that pass the selection on all five dimensions
/// (logical AND), preserving dataset order.
///
/// If any dimension's selected set is empty the result is empty, regardless
/// of the other dimensions.
pub fn matching_indices(dataset: &FlightDataset, selection: &FilterSelection) -> Vec<usize> {
    // An empty set can never match, so skip the per-record scan entirely.
    if Dimension::ALL.iter().any(|&dim| selection.values(dim).is_empty()) {
        return Vec::new();
    }

    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            Dimension::ALL
                .iter()
                .all(|&dim| selection.contains(dim, rec.dimension_value(dim)))
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::FlightRecord;

    fn flight(airline: &str, source: &str, dest: &str, class: &str, stops: &str) -> FlightRecord {
        FlightRecord {
            airline: airline.to_string(),
            source_city: source.to_string(),
            destination_city: dest.to_string(),
            travel_class: class.to_string(),
            stops: stops.to_string(),
            duration: 2.0,
            price: 100.0,
        }
    }

    fn sample_dataset() -> FlightDataset {
        FlightDataset::from_records(vec![
            flight("Vistara", "Delhi", "Mumbai", "Economy", "zero"),
            flight("AirAsia", "Delhi", "Chennai", "Business", "one"),
            flight("Vistara", "Kolkata", "Mumbai", "Economy", "one"),
            flight("Indigo", "Delhi", "Mumbai", "Economy", "zero"),
        ])
    }

    #[test]
    fn full_selection_matches_every_record() {
        let ds = sample_dataset();
        let selection = FilterSelection::matching_all(&ds);
        let indices = matching_indices(&ds, &selection);
        assert_eq!(indices, vec![0, 1, 2, 3]);
    }

    #[test]
    fn empty_set_on_one_dimension_matches_nothing() {
        let ds = sample_dataset();
        let mut selection = FilterSelection::matching_all(&ds);
        selection.set_values(Dimension::Stops, Default::default());
        assert!(matching_indices(&ds, &selection).is_empty());
    }

    #[test]
    fn dimensions_combine_with_logical_and() {
        let ds = sample_dataset();
        let mut selection = FilterSelection::matching_all(&ds);
        selection.set_values(
            Dimension::SourceCity,
            ["Delhi".to_string()].into_iter().collect(),
        );
        selection.set_values(
            Dimension::TravelClass,
            ["Economy".to_string()].into_iter().collect(),
        );
        // Rows 0 and 3: Delhi AND Economy. Row 1 is Delhi but Business.
        assert_eq!(matching_indices(&ds, &selection), vec![0, 3]);
    }

    #[test]
    fn filtering_preserves_dataset_order() {
        let ds = sample_dataset();
        let mut selection = FilterSelection::matching_all(&ds);
        selection.set_values(
            Dimension::Airline,
            ["Indigo".to_string(), "Vistara".to_string()]
                .into_iter()
                .collect(),
        );
        assert_eq!(matching_indices(&ds, &selection), vec![0, 2, 3]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = sample_dataset();
        let mut selection = FilterSelection::matching_all(&ds);
        selection.set_values(
            Dimension::Stops,
            ["one".to_string()].into_iter().collect(),
        );

        let first = matching_indices(&ds, &selection);
        let survivors: Vec<_> = first.iter().map(|&i| ds.records[i].clone()).collect();
        let refiltered = matching_indices(&FlightDataset::from_records(survivors), &selection);

        assert_eq!(refiltered.len(), first.len());
        assert_eq!(refiltered, vec![0, 1]);
    }

    #[test]
    fn toggle_removes_then_restores_a_value() {
        let ds = sample_dataset();
        let mut selection = FilterSelection::matching_all(&ds);

        selection.toggle(Dimension::Airline, "AirAsia");
        assert!(!selection.contains(Dimension::Airline, "AirAsia"));
        assert_eq!(matching_indices(&ds, &selection), vec![0, 2, 3]);

        selection.toggle(Dimension::Airline, "AirAsia");
        assert_eq!(matching_indices(&ds, &selection), vec![0, 1, 2, 3]);
    }
}
