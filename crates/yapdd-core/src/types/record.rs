use super::Priority;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// DNS record type supported by the PDD API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    /// Service locator
    Srv,
    /// Text
    Txt,
    /// Name server
    Ns,
    /// Mail exchanger
    Mx,
    /// Start of authority
    Soa,
    /// IPv4 address
    A,
    /// IPv6 address
    Aaaa,
    /// Canonical name
    Cname,
}

impl RecordType {
    /// All supported record types
    pub const ALL: [Self; 8] = [
        Self::Srv,
        Self::Txt,
        Self::Ns,
        Self::Mx,
        Self::Soa,
        Self::A,
        Self::Aaaa,
        Self::Cname,
    ];

    /// Wire name of the type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Srv => "SRV",
            Self::Txt => "TXT",
            Self::Ns => "NS",
            Self::Mx => "MX",
            Self::Soa => "SOA",
            Self::A => "A",
            Self::Aaaa => "AAAA",
            Self::Cname => "CNAME",
        }
    }

    /// Returns true if records of this type carry a priority
    #[must_use]
    pub const fn has_priority(self) -> bool {
        matches!(self, Self::Mx | Self::Srv)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown record type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRecordType(pub String);

impl fmt::Display for UnknownRecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown record type: {} (expected one of SRV, TXT, NS, MX, SOA, A, AAAA, CNAME)",
            self.0
        )
    }
}

impl std::error::Error for UnknownRecordType {}

impl FromStr for RecordType {
    type Err = UnknownRecordType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownRecordType(s.to_string()))
    }
}

/// A DNS record hosted by PDD
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Record identifier
    #[serde(rename = "record_id")]
    pub id: u32,

    /// Record type
    #[serde(rename = "type")]
    pub record_type: RecordType,

    /// Domain the record belongs to
    #[serde(default)]
    pub domain: String,

    /// Subdomain, `@` for the apex
    #[serde(default)]
    pub subdomain: String,

    /// Fully-qualified domain name
    #[serde(default)]
    pub fqdn: String,

    /// Time to live in seconds
    #[serde(default)]
    pub ttl: u32,

    /// Record content
    #[serde(default)]
    pub content: String,

    /// Priority (MX, SRV)
    #[serde(default)]
    pub priority: Priority,

    /// Server-side operation status, only set on edit responses
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub operation: String,
}

impl DnsRecord {
    /// Fully-qualified name, derived from subdomain and domain when the
    /// server did not send one
    #[must_use]
    pub fn name(&self) -> String {
        if !self.fqdn.is_empty() {
            return self.fqdn.clone();
        }
        match self.subdomain.as_str() {
            "" | "@" => self.domain.clone(),
            sub => format!("{sub}.{}", self.domain),
        }
    }
}
