//! Gleaner Dataset Storage
//!
//! JSON persistence for curated datasets: a dataset is one pretty-printed
//! JSON array on disk, with an optional `.json.backup` sibling holding the
//! previous version. [`JsonDatasetStore`] is the production implementation
//! of the `DatasetStore` seam from `gleaner-domain`.

#![warn(missing_docs)]

mod store;

pub use store::{verified_output_path, DatasetError, JsonDatasetStore};
