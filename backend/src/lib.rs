//! # Eclipse API
//!
//! Read-only REST API over a static dataset of lunar and solar eclipses.
//!
//! The source file is a `;`-delimited table (`date;type;regions;duration_sec`).
//! Rows are normalized into [`models::EclipseRecord`]s: dates are validated
//! (bad rows are dropped), types are reduced to a lowercase primary tag, and
//! durations are converted from seconds to whole minutes.
//!
//! ## Architecture
//!
//! - [`models`]: canonical record and accepted eclipse families
//! - [`parsing`]: loading and field normalization
//! - [`dataset`]: repository trait, load-once / load-per-request implementations
//! - [`services`]: the three query operations
//! - [`config`]: TOML + environment configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use eclipse_api::parsing::parse_eclipses;
//! use eclipse_api::services::{list_by_type, next_upcoming};
//!
//! let csv = "date;type;regions;duration_sec\n\
//!            2024-01-01;Total - Umbral;Asia;180\n\
//!            2099-12-31;Partial;Europe;\n";
//! let report = parse_eclipses(csv.as_bytes()).unwrap();
//! assert_eq!(report.records[0].eclipse_type, "total");
//! assert_eq!(report.records[0].duration, Some(3));
//!
//! let now = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let next = next_upcoming(&report.records, now).unwrap();
//! assert_eq!(next.date, NaiveDate::from_ymd_opt(2099, 12, 31).unwrap());
//! assert!(list_by_type(&report.records, "lunar").is_empty());
//! ```

pub mod config;
pub mod dataset;
pub mod models;
pub mod parsing;
pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
