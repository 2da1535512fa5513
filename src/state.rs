use std::collections::BTreeMap;

use crate::color::CategoryColors;
use crate::data::aggregate::{
    self, PriceBucket, RouteCount, Summary, DEFAULT_PRICE_BUCKETS,
};
use crate::data::filter::{matching_indices, FilterSelection};
use crate::data::model::{Dimension, FlightDataset};

/// How many airlines the ranking chart shows.
pub const TOP_AIRLINES: usize = 10;

/// How many routes the route chart shows.
pub const TOP_ROUTES: usize = 10;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// Derived views are recomputed synchronously on every selection change, so
/// the render path only reads cached data.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<FlightDataset>,

    /// Per-dimension filter selections.
    pub selection: FilterSelection,

    /// Indices of flights passing the current filters (cached).
    pub visible_indices: Vec<usize>,

    /// Headline metrics over the filtered view.
    pub summary: Summary,

    /// Top airlines by mean ticket price, descending.
    pub top_airlines: Vec<(String, f64)>,

    /// Ticket price distribution.
    pub price_buckets: Vec<PriceBucket>,

    /// Flights per travel class.
    pub class_counts: BTreeMap<String, usize>,

    /// Flights per (source, destination) route, busiest first.
    pub route_counts: Vec<RouteCount>,

    /// Colours for travel-class chart segments.
    pub class_colors: CategoryColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            selection: FilterSelection::default(),
            visible_indices: Vec::new(),
            summary: Summary::default(),
            top_airlines: Vec::new(),
            price_buckets: Vec::new(),
            class_counts: BTreeMap::new(),
            route_counts: Vec::new(),
            class_colors: CategoryColors::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: select everything, recompute views.
    pub fn set_dataset(&mut self, dataset: FlightDataset) {
        self.selection = FilterSelection::matching_all(&dataset);
        self.class_colors = CategoryColors::new(dataset.distinct(Dimension::TravelClass));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.refilter();
    }

    /// Recompute the filtered view and every derived aggregate.
    pub fn refilter(&mut self) {
        let Some(ds) = &self.dataset else {
            return;
        };
        self.visible_indices = matching_indices(ds, &self.selection);

        let indices = &self.visible_indices;
        self.summary = aggregate::summarize(ds, indices);
        self.top_airlines = aggregate::top_airlines_by_mean_price(ds, indices, TOP_AIRLINES);
        self.price_buckets = aggregate::price_histogram(ds, indices, DEFAULT_PRICE_BUCKETS);
        self.class_counts = aggregate::count_by_class(ds, indices);
        self.route_counts = aggregate::count_by_route(ds, indices);
        self.route_counts.truncate(TOP_ROUTES);
    }

    /// Toggle a single value in a dimension's filter.
    pub fn toggle_filter_value(&mut self, dim: Dimension, value: &str) {
        self.selection.toggle(dim, value);
        self.refilter();
    }

    /// Select all values in a dimension.
    pub fn select_all(&mut self, dim: Dimension) {
        if let Some(ds) = &self.dataset {
            self.selection.set_values(dim, ds.distinct(dim).clone());
            self.refilter();
        }
    }

    /// Deselect all values in a dimension. The resulting view is empty.
    pub fn select_none(&mut self, dim: Dimension) {
        self.selection.set_values(dim, Default::default());
        self.refilter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::FlightRecord;

    fn flight(airline: &str, class: &str, price: f64) -> FlightRecord {
        FlightRecord {
            airline: airline.to_string(),
            source_city: "Delhi".to_string(),
            destination_city: "Mumbai".to_string(),
            travel_class: class.to_string(),
            stops: "zero".to_string(),
            duration: 2.0,
            price,
        }
    }

    #[test]
    fn set_dataset_selects_everything_and_derives_views() {
        let mut state = AppState::default();
        state.set_dataset(FlightDataset::from_records(vec![
            flight("Vistara", "Economy", 100.0),
            flight("AirAsia", "Business", 300.0),
        ]));

        assert_eq!(state.visible_indices, vec![0, 1]);
        assert_eq!(state.summary.count, 2);
        assert_eq!(state.summary.mean_price, 200.0);
        assert_eq!(state.top_airlines.len(), 2);
        assert_eq!(state.class_counts.len(), 2);
        assert_eq!(state.route_counts.len(), 1);
    }

    #[test]
    fn select_none_empties_the_view_and_zeroes_the_summary() {
        let mut state = AppState::default();
        state.set_dataset(FlightDataset::from_records(vec![flight(
            "Vistara", "Economy", 100.0,
        )]));

        state.select_none(Dimension::Airline);
        assert!(state.visible_indices.is_empty());
        assert_eq!(state.summary, Summary::default());
        assert!(state.price_buckets.is_empty());
        assert!(state.top_airlines.is_empty());

        state.select_all(Dimension::Airline);
        assert_eq!(state.visible_indices, vec![0]);
    }

    #[test]
    fn toggling_a_value_refilters() {
        let mut state = AppState::default();
        state.set_dataset(FlightDataset::from_records(vec![
            flight("Vistara", "Economy", 100.0),
            flight("AirAsia", "Economy", 300.0),
        ]));

        state.toggle_filter_value(Dimension::Airline, "AirAsia");
        assert_eq!(state.visible_indices, vec![0]);
        assert_eq!(state.summary.count, 1);
        assert_eq!(state.summary.max_price, 100.0);
    }
}
