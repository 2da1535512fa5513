use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Detail table (filtered records)
// ---------------------------------------------------------------------------

const HEADERS: [&str; 7] = [
    "Airline",
    "Source",
    "Destination",
    "Class",
    "Stops",
    "Duration (h)",
    "Price",
];

/// Render the filtered records as a virtualized table.
pub fn detail_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    ui.strong(format!("Flights ({})", state.visible_indices.len()));

    TableBuilder::new(ui)
        .striped(true)
        .columns(Column::auto().resizable(true), HEADERS.len() - 1)
        .column(Column::remainder())
        .max_scroll_height(320.0)
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            // Virtualized: only visible rows are laid out.
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let rec = &dataset.records[state.visible_indices[row.index()]];
                row.col(|ui| {
                    ui.label(&rec.airline);
                });
                row.col(|ui| {
                    ui.label(&rec.source_city);
                });
                row.col(|ui| {
                    ui.label(&rec.destination_city);
                });
                row.col(|ui| {
                    ui.label(&rec.travel_class);
                });
                row.col(|ui| {
                    ui.label(&rec.stops);
                });
                row.col(|ui| {
                    ui.label(format!("{:.2}", rec.duration));
                });
                row.col(|ui| {
                    ui.label(format!("{:.2}", rec.price));
                });
            });
        });
}
