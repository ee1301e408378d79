//! Sample data for Extrema.
//!
//! Turns a transaction table into the ordered numeric sequence the searches
//! run over, or generates one when no table is available:
//! - [`Dataset`]: CSV and xlsx loading with per-row revenue derivation and filtering
//! - [`category_extrema`]: grouped min/max per category label
//! - [`SampleGenerator`]: seeded uniform integer samples

mod category;
mod dataset;
mod error;
mod generator;

#[cfg(test)]
mod dataset_tests;

pub use category::{category_extrema, CategoryExtrema};
pub use dataset::{Dataset, Record};
pub use error::{DataError, Result};
pub use generator::SampleGenerator;
