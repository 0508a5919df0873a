//! Rust client for the Yandex PDD (Mail for Domain) DNS API.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use yapdd::{DnsParams, PddClient, RecordType};
//!
//! # async fn run() -> yapdd::Result<()> {
//! let client = PddClient::new("your-pdd-token")?;
//!
//! // Add an A record for www.example.com
//! let added = client
//!     .dns()
//!     .add(
//!         "example.com",
//!         RecordType::A,
//!         DnsParams::new().subdomain("www").content("192.0.2.1").ttl(900),
//!     )
//!     .await?
//!     .into_result()?;
//! println!("added: {:?}", added.record);
//!
//! // List every record of the domain
//! for record in client.dns().list("example.com").await?.records {
//!     println!("{} {} {}", record.record_type, record.name(), record.content);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Registrars acting on behalf of a domain owner use
//! [`PddClient::registrar`] with an additional OAuth token.
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/yapdd/0.1.0")]

// Re-export core types
pub use yapdd_core::*;

// Re-export client
pub use yapdd_client::api::DnsApi;
pub use yapdd_client::{PddClient, PddClientBuilder, Role, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

pub use serde;
pub use serde_json;
