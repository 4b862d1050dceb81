//! Service layer for eclipse queries.
//!
//! Services sit between the HTTP handlers and the dataset repository and hold
//! the query logic.

pub mod eclipses;

#[cfg(test)]
mod eclipses_tests;

pub use eclipses::{
    fetch_all, fetch_by_type, fetch_next_upcoming, list_all, list_by_type, next_upcoming,
};
