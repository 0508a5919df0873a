//! HTTP client for the Yandex PDD DNS API.
//!
//! This crate provides the main [`PddClient`] for managing DNS records of a
//! domain hosted on PDD, either as the domain administrator or as a
//! registrar acting on behalf of the owner.

#![doc(html_root_url = "https://docs.rs/yapdd-client/0.1.0")]

mod client;
mod config;
pub mod api;

pub use client::{PddClient, PddClientBuilder};
pub use config::*;
pub use yapdd_core::{PddError, Result};
