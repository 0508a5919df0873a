//! Core types for the Yandex PDD DNS API client.
//!
//! This crate provides the foundational types used across the yapdd library:
//!
//! - **Types**: Strongly-typed representations of DNS records and API responses
//! - **Params**: [`DnsParams`], the canonical form-encoded request parameters
//! - **Errors**: Error handling with [`PddError`]
//!
//! # Example
//!
//! ```rust
//! use yapdd_core::{DnsParams, RecordType};
//!
//! let params = DnsParams::new()
//!     .subdomain("www")
//!     .content("1.2.3.4")
//!     .record_type(RecordType::A);
//!
//! assert_eq!(params.to_body(), "content=1.2.3.4&subdomain=www&type=A");
//! ```

#![doc(html_root_url = "https://docs.rs/yapdd-core/0.1.0")]

mod error;
mod params;
pub mod types;

pub use error::{PddError, Result};
pub use params::DnsParams;
pub use types::*;
