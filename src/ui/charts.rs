use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::state::AppState;

const CHART_HEIGHT: f32 = 240.0;

// ---------------------------------------------------------------------------
// KPI strip
// ---------------------------------------------------------------------------

/// Render the four headline metrics over the filtered view.
pub fn kpi_strip(ui: &mut Ui, state: &AppState) {
    let s = &state.summary;
    ui.columns(4, |cols| {
        metric(&mut cols[0], "Mean price", format!("{:.2}", s.mean_price));
        metric(&mut cols[1], "Max price", format!("{:.2}", s.max_price));
        metric(
            &mut cols[2],
            "Mean duration (h)",
            format!("{:.2}", s.mean_duration),
        );
        metric(&mut cols[3], "Flights", s.count.to_string());
    });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(label);
        ui.label(RichText::new(value).heading().strong());
    });
}

// ---------------------------------------------------------------------------
// Charts (2 × 2 grid)
// ---------------------------------------------------------------------------

/// Render the four aggregate charts. An empty view shows a notice instead.
pub fn chart_grid(ui: &mut Ui, state: &AppState) {
    if state.visible_indices.is_empty() {
        ui.vertical_centered(|ui: &mut Ui| {
            ui.add_space(24.0);
            ui.label(RichText::new("No data for the current filters.").heading());
        });
        return;
    }

    ui.columns(2, |cols| {
        top_airlines_chart(&mut cols[0], state);
        price_histogram_chart(&mut cols[1], state);
    });
    ui.columns(2, |cols| {
        class_breakdown_chart(&mut cols[0], state);
        route_counts_chart(&mut cols[1], state);
    });
}

/// Horizontal bar chart: top airlines by mean ticket price.
fn top_airlines_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Top airlines by mean price");

    let names: Vec<String> = state.top_airlines.iter().map(|(a, _)| a.clone()).collect();
    let bars: Vec<Bar> = state
        .top_airlines
        .iter()
        .enumerate()
        .map(|(i, (airline, mean))| {
            Bar::new(i as f64, *mean).name(airline).width(0.6)
        })
        .collect();

    Plot::new("top_airlines")
        .height(CHART_HEIGHT)
        .x_axis_label("Mean price")
        .y_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() < 1e-6 && i >= 0.0 && (i as usize) < names.len() {
                names[i as usize].clone()
            } else {
                String::new()
            }
        })
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

/// Vertical histogram of ticket prices.
fn price_histogram_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Price distribution");

    let bars: Vec<Bar> = state
        .price_buckets
        .iter()
        .map(|bucket| {
            let center = (bucket.low + bucket.high) / 2.0;
            let width = (bucket.high - bucket.low).max(1.0);
            Bar::new(center, bucket.count as f64)
                .width(width)
                .name(format!("{:.0}–{:.0}", bucket.low, bucket.high))
        })
        .collect();

    Plot::new("price_histogram")
        .height(CHART_HEIGHT)
        .x_axis_label("Price")
        .y_axis_label("Flights")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Per-class flight counts, one coloured bar per travel class.
fn class_breakdown_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Flights per class");

    let charts: Vec<BarChart> = state
        .class_counts
        .iter()
        .enumerate()
        .map(|(i, (class, count))| {
            let color = state.class_colors.color_for(class);
            let bar = Bar::new(i as f64, *count as f64).width(0.6).fill(color);
            BarChart::new(vec![bar]).name(class).color(color)
        })
        .collect();

    Plot::new("class_breakdown")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .y_axis_label("Flights")
        .show_x(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Horizontal bar chart of the busiest routes.
fn route_counts_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Busiest routes");

    let labels: Vec<String> = state
        .route_counts
        .iter()
        .map(|r| format!("{} → {}", r.source_city, r.destination_city))
        .collect();
    let bars: Vec<Bar> = state
        .route_counts
        .iter()
        .enumerate()
        .map(|(i, route)| {
            Bar::new(i as f64, route.count as f64)
                .name(&labels[i])
                .width(0.6)
        })
        .collect();

    Plot::new("route_counts")
        .height(CHART_HEIGHT)
        .x_axis_label("Flights")
        .y_axis_formatter(move |mark, _range| {
            let i = mark.value.round();
            if (mark.value - i).abs() < 1e-6 && i >= 0.0 && (i as usize) < labels.len() {
                labels[i as usize].clone()
            } else {
                String::new()
            }
        })
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}
