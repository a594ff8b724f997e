//! # Dataset Crate
//!
//! Acquires and decodes restaurant listings for a city term.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (`Restaurant`, `PriceTier`)
//! - **parser**: Decode the search payload (API response / cache file)
//! - **provider**: Cache-first `DatasetProvider` and the `RestaurantSource`
//!   trait the pipeline consumes
//! - **error**: Error types for data acquisition
//!
//! ## Example Usage
//!
//! ```ignore
//! use dataset::{DatasetProvider, ProviderConfig, RestaurantSource};
//!
//! let provider = DatasetProvider::new(ProviderConfig {
//!     api_key: Some(key),
//!     ..ProviderConfig::default()
//! });
//! let restaurants = provider.fetch("Ann Arbor").await?;
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod provider;
pub mod types;

// Re-export commonly used types for convenience
pub use error::{DatasetError, Result};
pub use provider::{DatasetProvider, ProviderConfig, RestaurantSource};
pub use types::{PriceTier, Restaurant};
