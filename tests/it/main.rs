//! Single test binary entry point.
//!
//! Structure:
//! - parsing: text to dataset, error taxonomy
//! - classification: column kinds and default axes over parsed input
//! - snapshots: serialized output boundary

mod classification;
mod parsing;
mod snapshots;
