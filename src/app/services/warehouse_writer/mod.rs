//! Warehouse writer service
//!
//! Converts the rebuilt star schema to polars DataFrames and writes it to
//! the output directory as CSV or Parquet, together with the read-only
//! aggregate views. The module is organized into:
//! - [`frames`] - entity structs to DataFrame conversion
//! - [`views`] - lazy aggregate view computation over the frames
//! - [`writer`] - table truncation and file output
//!
//! Every run fully replaces the previously written tables; there is no
//! incremental or merge-based output.

pub mod frames;
pub mod views;
pub mod writer;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use writer::{ExportStats, WarehouseWriter};
