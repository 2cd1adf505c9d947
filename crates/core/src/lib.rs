//! Domain logic for the movie watchlist.
//!
//! Holds the record models, payload validation, path-id lookup, and the
//! pure list/statistics/update rules. Nothing in this crate touches the
//! filesystem or HTTP.

pub mod catalog;
pub mod error;
pub mod lookup;
pub mod merge;
pub mod models;
pub mod types;
pub mod validation;
