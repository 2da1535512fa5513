//! Interactive flight-pricing dashboard.
//!
//! The `data` module is the pure core (loading, filtering, aggregation);
//! `state`, `ui`, and `app` are the egui presentation layer on top of it.

pub mod app;
pub mod color;
pub mod data;
pub mod state;
pub mod ui;
