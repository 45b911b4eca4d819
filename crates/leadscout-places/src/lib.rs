//! Typed client for the Google Places Web Service.
//!
//! Covers the two endpoints the lead pipeline needs: text search and place
//! details. Every response carries a `"status"` envelope; anything other than
//! `"OK"` is surfaced as [`PlacesError::Status`].

mod client;
mod error;
mod types;

pub use client::PlacesClient;
pub use error::PlacesError;
pub use types::{OpeningHours, PlaceDetail, PlaceSummary};
