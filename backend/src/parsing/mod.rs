//! Parsers for the eclipse dataset.
//!
//! - [`csv_parser`]: read the `;`-delimited source file into [`EclipseRecord`]s
//! - [`normalize`]: per-field rules (dates, type tags, seconds to minutes)
//!
//! # Example
//!
//! ```no_run
//! use eclipse_api::parsing::load_eclipses;
//! use std::path::Path;
//!
//! let report = load_eclipses(Path::new("eclipse_data.csv"))
//!     .expect("Failed to load eclipses");
//! println!("{} records, {} dropped", report.records.len(), report.dropped_rows);
//! ```
//!
//! [`EclipseRecord`]: crate::models::EclipseRecord

pub mod csv_parser;
pub mod normalize;


pub use csv_parser::{load_eclipses, parse_eclipses, LoadReport};
