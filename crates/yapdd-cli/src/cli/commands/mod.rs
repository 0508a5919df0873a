//! Command implementations.

pub mod config;
pub mod records;

use crate::output::OutputFormat;
use yapdd::PddClient;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// PDD token
    pub token: Option<String>,

    /// Registrar OAuth token
    pub oauth_token: Option<String>,

    /// API base URL override
    pub base_url: Option<String>,

    /// Output format
    pub output_format: OutputFormat,
}

impl Context {
    /// Get the PDD token, returning an error if not set.
    pub fn require_token(&self) -> anyhow::Result<&str> {
        self.token.as_deref().ok_or_else(|| {
            anyhow::anyhow!(
                "PDD token required.\n\n\
                 Set it with one of:\n  \
                 1. --token <TOKEN>\n  \
                 2. PDD_TOKEN environment variable\n  \
                 3. pdd config set token <TOKEN>"
            )
        })
    }

    /// Create a client for the configured token and role.
    pub fn client(&self) -> anyhow::Result<PddClient> {
        let mut builder = PddClient::builder(self.require_token()?);

        if let Some(oauth_token) = &self.oauth_token {
            builder = builder.registrar(oauth_token);
        }
        if let Some(url) = &self.base_url {
            builder = builder.base_url(url);
        }

        Ok(builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(token: Option<&str>, oauth_token: Option<&str>) -> Context {
        Context {
            token: token.map(String::from),
            oauth_token: oauth_token.map(String::from),
            base_url: None,
            output_format: OutputFormat::Pretty,
        }
    }

    #[test]
    fn test_missing_token() {
        let err = ctx(None, None).client().unwrap_err();
        assert!(err.to_string().contains("PDD token required"));
    }

    #[test]
    fn test_role_from_oauth_token() {
        let admin = ctx(Some("t"), None).client().unwrap();
        assert!(!admin.role().is_registrar());

        let registrar = ctx(Some("t"), Some("o")).client().unwrap();
        assert!(registrar.role().is_registrar());
    }
}
