//! End-to-end pipeline tests: load a file, filter, and check every derived
//! view against hand-computed values.

use std::io::Write;

use tempfile::Builder;

use flightdash::data::aggregate::{
    count_by_class, count_by_route, price_histogram, summarize, top_airlines_by_mean_price,
};
use flightdash::data::filter::{matching_indices, FilterSelection};
use flightdash::data::loader::load_file;
use flightdash::data::model::Dimension;

const TWO_FLIGHTS_CSV: &str = "\
airline,source_city,destination_city,class,stops,duration,price
A,X,Y,Economy,zero,2.0,100
B,X,Z,Business,one,5.0,300
";

#[test]
fn unfiltered_pipeline_over_two_flights() {
    let mut tmp = Builder::new().suffix(".csv").tempfile().unwrap();
    write!(tmp, "{TWO_FLIGHTS_CSV}").unwrap();

    let dataset = load_file(tmp.path()).unwrap();
    let selection = FilterSelection::matching_all(&dataset);
    let view = matching_indices(&dataset, &selection);
    assert_eq!(view, vec![0, 1]);

    let summary = summarize(&dataset, &view);
    assert_eq!(summary.count, 2);
    assert_eq!(summary.mean_price, 200.0);
    assert_eq!(summary.max_price, 300.0);
    assert_eq!(summary.mean_duration, 3.5);

    let top = top_airlines_by_mean_price(&dataset, &view, 10);
    assert_eq!(
        top,
        vec![("B".to_string(), 300.0), ("A".to_string(), 100.0)]
    );

    let classes = count_by_class(&dataset, &view);
    assert_eq!(classes["Economy"], 1);
    assert_eq!(classes["Business"], 1);
    assert_eq!(classes.values().sum::<usize>(), view.len());

    let routes = count_by_route(&dataset, &view);
    assert_eq!(routes.len(), 2);
    assert!(routes.iter().all(|r| r.count == 1));

    let buckets = price_histogram(&dataset, &view, 30);
    assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), 2);
    assert_eq!(buckets.first().unwrap().low, 100.0);
    assert!((buckets.last().unwrap().high - 300.0).abs() < 1e-9);
}

#[test]
fn excluding_one_airline_narrows_every_view() {
    let mut tmp = Builder::new().suffix(".csv").tempfile().unwrap();
    write!(tmp, "{TWO_FLIGHTS_CSV}").unwrap();

    let dataset = load_file(tmp.path()).unwrap();
    let mut selection = FilterSelection::matching_all(&dataset);
    selection.toggle(Dimension::Airline, "B");

    let view = matching_indices(&dataset, &selection);
    assert_eq!(view, vec![0]);

    let summary = summarize(&dataset, &view);
    assert_eq!(summary.count, 1);
    assert_eq!(summary.mean_price, 100.0);
    assert_eq!(summary.max_price, 100.0);
    assert_eq!(summary.mean_duration, 2.0);

    let classes = count_by_class(&dataset, &view);
    assert_eq!(classes.len(), 1);
    assert_eq!(classes["Economy"], 1);
}

#[test]
fn full_selection_round_trips_the_dataset() {
    let mut tmp = Builder::new().suffix(".csv").tempfile().unwrap();
    write!(tmp, "{TWO_FLIGHTS_CSV}").unwrap();

    let dataset = load_file(tmp.path()).unwrap();
    let selection = FilterSelection::matching_all(&dataset);
    let view = matching_indices(&dataset, &selection);
    assert_eq!(view.len(), dataset.len());
    assert!(view.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn empty_dimension_empties_the_pipeline() {
    let mut tmp = Builder::new().suffix(".csv").tempfile().unwrap();
    write!(tmp, "{TWO_FLIGHTS_CSV}").unwrap();

    let dataset = load_file(tmp.path()).unwrap();
    let selection = FilterSelection::matching_none();

    let view = matching_indices(&dataset, &selection);
    assert!(view.is_empty());

    let summary = summarize(&dataset, &view);
    assert_eq!(summary.count, 0);
    assert_eq!(summary.mean_price, 0.0);
    assert_eq!(summary.max_price, 0.0);
    assert_eq!(summary.mean_duration, 0.0);

    assert!(top_airlines_by_mean_price(&dataset, &view, 10).is_empty());
    assert!(price_histogram(&dataset, &view, 30).is_empty());
    assert!(count_by_class(&dataset, &view).is_empty());
    assert!(count_by_route(&dataset, &view).is_empty());
}
