//! HTTP client for the quote endpoint.

mod client;
mod error;

pub use client::{QuoteApi, BASE_URL};
pub use error::ApiError;
