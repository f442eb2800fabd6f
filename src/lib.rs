//! A single pre-configured HTTP client for the application's JSON API.
//!
//! The base URL comes from `VITE_API_URL` (falling back to
//! `http://localhost:8000`) with `/api` appended. Every request carries
//! `Content-Type: application/json`, and cookies set by the API are sent back
//! on later requests.

pub mod config;
pub mod endpoints;
pub mod error;
pub mod http;

pub use config::{ClientConfiguration, TransportSettings};
pub use error::ApiError;
pub use http::{ApiClient, shared};
