//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use yapdd::{DnsParams, RecordType};

use crate::output::OutputFormat;

/// Manage DNS records hosted on Yandex PDD
///
/// Get a PDD token at: https://pddimp.yandex.ru/api2/admin/get_token
#[derive(Parser, Debug)]
#[command(name = "pdd")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// PDD token (or set PDD_TOKEN env var)
    #[arg(short = 't', long, env = "PDD_TOKEN", global = true, hide_env_values = true)]
    pub token: Option<String>,

    /// OAuth token; switches to the registrar API (or set PDD_OAUTH_TOKEN)
    #[arg(long, env = "PDD_OAUTH_TOKEN", global = true, hide_env_values = true)]
    pub oauth_token: Option<String>,

    /// Override the API base URL
    #[arg(long, env = "PDD_API_URL", global = true, hide = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Log requests to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all records of a domain
    List {
        /// Domain name
        domain: String,
    },

    /// Add a record
    Add(AddArgs),

    /// Edit an existing record
    Edit(EditArgs),

    /// Delete a record
    Del {
        /// Domain name
        domain: String,

        /// Record identifier (see `pdd list`)
        record_id: u32,
    },

    /// Manage CLI configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Domain name
    pub domain: String,

    /// Record type (A, AAAA, CNAME, MX, TXT, NS, SOA, SRV)
    pub record_type: RecordType,

    #[command(flatten)]
    pub fields: RecordFields,
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Domain name
    pub domain: String,

    /// Record identifier (see `pdd list`)
    pub record_id: u32,

    #[command(flatten)]
    pub fields: RecordFields,
}

/// Optional record fields shared by `add` and `edit`
#[derive(Args, Debug, Default)]
pub struct RecordFields {
    /// Subdomain, `@` for the apex
    #[arg(short, long)]
    pub subdomain: Option<String>,

    /// Record content
    #[arg(short, long)]
    pub content: Option<String>,

    /// Time to live in seconds
    #[arg(long)]
    pub ttl: Option<u32>,

    /// Priority (MX, SRV)
    #[arg(short, long)]
    pub priority: Option<u16>,

    /// Weight (SRV)
    #[arg(long)]
    pub weight: Option<u16>,

    /// Port (SRV)
    #[arg(long)]
    pub port: Option<u16>,

    /// Target host (SRV)
    #[arg(long)]
    pub target: Option<String>,

    /// Administrator email (SOA)
    #[arg(long)]
    pub admin_mail: Option<String>,

    /// Refresh interval in seconds (SOA)
    #[arg(long)]
    pub refresh: Option<u32>,

    /// Retry interval in seconds (SOA)
    #[arg(long)]
    pub retry: Option<u32>,

    /// Expire interval in seconds (SOA)
    #[arg(long)]
    pub expire: Option<u32>,

    /// Negative caching TTL in seconds (SOA)
    #[arg(long)]
    pub neg_cache: Option<u32>,
}

impl RecordFields {
    /// Convert the given flags into request parameters
    pub fn into_params(self) -> DnsParams {
        let mut params = DnsParams::new();

        if let Some(v) = self.subdomain {
            params = params.subdomain(v);
        }
        if let Some(v) = self.content {
            params = params.content(v);
        }
        if let Some(v) = self.ttl {
            params = params.ttl(v);
        }
        if let Some(v) = self.priority {
            params = params.priority(v);
        }
        if let Some(v) = self.weight {
            params = params.weight(v);
        }
        if let Some(v) = self.port {
            params = params.port(v);
        }
        if let Some(v) = self.target {
            params = params.target(v);
        }
        if let Some(v) = self.admin_mail {
            params = params.admin_mail(v);
        }
        if let Some(v) = self.refresh {
            params = params.refresh(v);
        }
        if let Some(v) = self.retry {
            params = params.retry(v);
        }
        if let Some(v) = self.expire {
            params = params.expire(v);
        }
        if let Some(v) = self.neg_cache {
            params = params.neg_cache(v);
        }

        params
    }
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (token, oauth_token, output_format, base_url)
        key: String,

        /// Value to set
        value: String,
    },

    /// Print the configuration file path
    Path,
}
