//! Task model and the pure query layer: filtering, deadline windows,
//! sorting and statistics.

pub mod date_parser;
pub mod deadline;
pub mod filter;
pub mod priority;
pub mod sort;
pub mod stats;
pub mod task;
