pub mod builder;
pub mod client;
pub mod executor;

pub use client::{ApiClient, build_client, shared};
