//! Paste tabular text (CSV or JSON), infer which columns are numeric, and
//! chart it.
//!
//! The [`data`] module is the UI-independent core; [`state`], [`app`] and
//! [`ui`] are the egui viewer built on top of it.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;
