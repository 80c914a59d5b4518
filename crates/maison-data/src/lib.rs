//! HTTP client for the Maison remote product catalog.
//!
//! The catalog collaborator exposes three read-only endpoints; this crate
//! wraps them as typed async calls and classifies every failure into the
//! [`FetchError`] taxonomy:
//!
//! ```rust,ignore
//! use maison_data::CatalogClient;
//!
//! let client = CatalogClient::new();
//! let products = client.products().await?;
//! let categories = client.categories().await?;
//! ```

mod client;
mod error;

pub use client::{CatalogClient, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::FetchError;
