use std::collections::BTreeMap;

use super::model::FlightDataset;

// ---------------------------------------------------------------------------
// Headline metrics
// ---------------------------------------------------------------------------

/// The four KPI numbers computed over a filtered view.
///
/// All fields are zero for an empty view so the display layer never has to
/// branch on "no data" when formatting metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean_price: f64,
    pub max_price: f64,
    pub mean_duration: f64,
}

/// Compute the headline metrics over the records selected by `indices`.
pub fn summarize(dataset: &FlightDataset, indices: &[usize]) -> Summary {
    if indices.is_empty() {
        return Summary::default();
    }

    let mut price_sum = 0.0;
    let mut duration_sum = 0.0;
    let mut max_price = f64::NEG_INFINITY;

    for &i in indices {
        let rec = &dataset.records[i];
        price_sum += rec.price;
        duration_sum += rec.duration;
        max_price = max_price.max(rec.price);
    }

    let n = indices.len() as f64;
    Summary {
        count: indices.len(),
        mean_price: price_sum / n,
        max_price,
        mean_duration: duration_sum / n,
    }
}

// ---------------------------------------------------------------------------
// Top airlines by mean price
// ---------------------------------------------------------------------------

/// Mean ticket price per airline, descending, truncated to `n` entries.
///
/// Ties on mean price break by ascending airline name so the ranking is a
/// deterministic total order.
pub fn top_airlines_by_mean_price(
    dataset: &FlightDataset,
    indices: &[usize],
    n: usize,
) -> Vec<(String, f64)> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for &i in indices {
        let rec = &dataset.records[i];
        let entry = sums.entry(&rec.airline).or_insert((0.0, 0));
        entry.0 += rec.price;
        entry.1 += 1;
    }

    let mut means: Vec<(String, f64)> = sums
        .into_iter()
        .map(|(airline, (sum, count))| (airline.to_string(), sum / count as f64))
        .collect();

    // BTreeMap already emits airlines in ascending name order, so a stable
    // sort on mean alone keeps the name tie-break.
    means.sort_by(|a, b| b.1.total_cmp(&a.1));
    means.truncate(n);
    means
}

// ---------------------------------------------------------------------------
// Price histogram
// ---------------------------------------------------------------------------

/// One equal-width sub-range of the price histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBucket {
    pub low: f64,
    pub high: f64,
    pub count: usize,
}

/// Default bucket count for the price distribution chart.
pub const DEFAULT_PRICE_BUCKETS: usize = 30;

/// Partition [min(price), max(price)] into `bucket_count` equal-width
/// buckets and count records per bucket.
///
/// An empty view yields zero buckets. A degenerate price range (all records
/// share one price) collapses to a single bucket holding every record.
/// Records at exactly max price land in the last bucket.
pub fn price_histogram(
    dataset: &FlightDataset,
    indices: &[usize],
    bucket_count: usize,
) -> Vec<PriceBucket> {
    if indices.is_empty() || bucket_count == 0 {
        return Vec::new();
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &i in indices {
        let price = dataset.records[i].price;
        min = min.min(price);
        max = max.max(price);
    }

    let range = max - min;
    if range == 0.0 {
        return vec![PriceBucket {
            low: min,
            high: max,
            count: indices.len(),
        }];
    }

    let width = range / bucket_count as f64;
    let mut buckets: Vec<PriceBucket> = (0..bucket_count)
        .map(|b| PriceBucket {
            low: min + b as f64 * width,
            high: min + (b + 1) as f64 * width,
            count: 0,
        })
        .collect();

    for &i in indices {
        let price = dataset.records[i].price;
        let b = (((price - min) / width) as usize).min(bucket_count - 1);
        buckets[b].count += 1;
    }

    buckets
}

// ---------------------------------------------------------------------------
// Categorical breakdowns
// ---------------------------------------------------------------------------

/// Record count per travel class, iterated in ascending class name order.
pub fn count_by_class(dataset: &FlightDataset, indices: &[usize]) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for &i in indices {
        *counts
            .entry(dataset.records[i].travel_class.clone())
            .or_insert(0) += 1;
    }
    counts
}

/// Record count for one (source, destination) city pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteCount {
    pub source_city: String,
    pub destination_city: String,
    pub count: usize,
}

/// Record count per route, descending by count, ties broken by ascending
/// (source_city, destination_city).
pub fn count_by_route(dataset: &FlightDataset, indices: &[usize]) -> Vec<RouteCount> {
    let mut counts: BTreeMap<(&str, &str), usize> = BTreeMap::new();
    for &i in indices {
        let rec = &dataset.records[i];
        *counts
            .entry((&rec.source_city, &rec.destination_city))
            .or_insert(0) += 1;
    }

    let mut routes: Vec<RouteCount> = counts
        .into_iter()
        .map(|((source, dest), count)| RouteCount {
            source_city: source.to_string(),
            destination_city: dest.to_string(),
            count,
        })
        .collect();

    // Emission order from the map is already ascending by city pair; the
    // stable sort keeps that order within equal counts.
    routes.sort_by(|a, b| b.count.cmp(&a.count));
    routes
}
