//! # yapdd-cli
//!
//! Command-line interface for the Yandex PDD DNS API.
//!
//! ## Features
//!
//! - **Record management**: list, add, edit and delete DNS records
//! - **Registrar mode**: `--oauth-token` switches to the registrar API
//! - **Multiple output formats**: Pretty tables, JSON, CSV

pub mod cli;
pub mod config;
pub mod output;

pub use cli::run;
