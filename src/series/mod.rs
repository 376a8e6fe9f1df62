//! Series — filename series inference and latest-version selection.
//!
//! Handles series-key normalization, grouping of search hits by series,
//! and reduction of each series to its most recently modified file.

pub mod group;
pub mod normalize;
pub mod schema;
pub mod select;

pub use group::{group_by_series, SeriesGroup};
pub use normalize::normalize;
pub use schema::{FileRecord, RankedResult};
pub use select::{assemble, select_latest};
