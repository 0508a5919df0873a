//! Client configuration types.

use std::fmt;
use std::time::Duration;

/// The PDD API base URL
pub const DEFAULT_BASE_URL: &str = "https://pddimp.yandex.ru/api2";

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Header carrying the PDD token on every request
pub const PDD_TOKEN_HEADER: &str = "PddToken";

/// Content type sent with every request, GET included
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Who the client authenticates as
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Role {
    /// Domain administrator, PDD token only
    #[default]
    Admin,
    /// Registrar acting for a domain owner, PDD token plus OAuth token
    Registrar {
        /// OAuth token of the registrar
        oauth_token: String,
    },
}

impl Role {
    /// URL path segment selecting the API flavour
    #[must_use]
    pub const fn path_segment(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Registrar { .. } => "registrar",
        }
    }

    /// Value of the `Authorization` header, if the role needs one
    #[must_use]
    pub fn authorization(&self) -> Option<String> {
        match self {
            Self::Admin => None,
            Self::Registrar { oauth_token } => Some(format!("OAuth {oauth_token}")),
        }
    }

    /// Returns true for the registrar role
    #[must_use]
    pub const fn is_registrar(&self) -> bool {
        matches!(self, Self::Registrar { .. })
    }
}

// Tokens stay out of logs and panics.
impl fmt::Debug for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => f.write_str("Admin"),
            Self::Registrar { .. } => f
                .debug_struct("Registrar")
                .field("oauth_token", &"<redacted>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin() {
        let role = Role::default();
        assert_eq!(role.path_segment(), "admin");
        assert_eq!(role.authorization(), None);
        assert!(!role.is_registrar());
    }

    #[test]
    fn test_registrar() {
        let role = Role::Registrar {
            oauth_token: "oauthToken".into(),
        };
        assert_eq!(role.path_segment(), "registrar");
        assert_eq!(role.authorization().as_deref(), Some("OAuth oauthToken"));
        assert!(role.is_registrar());
    }

    #[test]
    fn test_debug_redacts_token() {
        let role = Role::Registrar {
            oauth_token: "secret".into(),
        };
        let debug = format!("{role:?}");
        assert!(!debug.contains("secret"));
        assert!(debug.contains("Registrar"));
    }
}
