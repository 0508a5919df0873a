//! Form-encoded request parameters for the DNS endpoints.

use crate::types::RecordType;
use std::collections::BTreeMap;

/// Parameters sent with a DNS request.
///
/// Every field is optional and only set fields are encoded. Setters consume
/// and return the builder; setting a field twice keeps the last value.
/// Encoding is always sorted by wire name, whatever order the setters ran in.
///
/// Values are passed through verbatim: the service validates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnsParams {
    domain: Option<String>,
    record_type: Option<RecordType>,
    record_id: Option<u32>,
    admin_mail: Option<String>,
    content: Option<String>,
    priority: Option<u16>,
    weight: Option<u16>,
    port: Option<u16>,
    target: Option<String>,
    subdomain: Option<String>,
    ttl: Option<u32>,
    refresh: Option<u32>,
    retry: Option<u32>,
    expire: Option<u32>,
    neg_cache: Option<u32>,
}

impl DnsParams {
    /// Create an empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Domain the record belongs to
    #[must_use]
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Record type
    #[must_use]
    pub const fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = Some(record_type);
        self
    }

    /// Record identifier
    #[must_use]
    pub const fn record_id(mut self, id: u32) -> Self {
        self.record_id = Some(id);
        self
    }

    /// Administrator email (SOA)
    #[must_use]
    pub fn admin_mail(mut self, email: impl Into<String>) -> Self {
        self.admin_mail = Some(email.into());
        self
    }

    /// Record content; meaning depends on the record type
    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Priority (MX, SRV)
    #[must_use]
    pub const fn priority(mut self, priority: u16) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Weight (SRV)
    #[must_use]
    pub const fn weight(mut self, weight: u16) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Port (SRV)
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Target host (SRV)
    #[must_use]
    pub fn target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Subdomain, `@` for the apex
    #[must_use]
    pub fn subdomain(mut self, subdomain: impl Into<String>) -> Self {
        self.subdomain = Some(subdomain.into());
        self
    }

    /// Time to live in seconds
    #[must_use]
    pub const fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// SOA refresh interval in seconds
    #[must_use]
    pub const fn refresh(mut self, refresh: u32) -> Self {
        self.refresh = Some(refresh);
        self
    }

    /// SOA retry interval in seconds
    #[must_use]
    pub const fn retry(mut self, retry: u32) -> Self {
        self.retry = Some(retry);
        self
    }

    /// SOA expire interval in seconds
    #[must_use]
    pub const fn expire(mut self, expire: u32) -> Self {
        self.expire = Some(expire);
        self
    }

    /// SOA negative caching TTL in seconds
    #[must_use]
    pub const fn neg_cache(mut self, neg_cache: u32) -> Self {
        self.neg_cache = Some(neg_cache);
        self
    }

    /// Set fields as `(wire name, value)` pairs, sorted by name
    #[must_use]
    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut map = BTreeMap::new();

        let mut put = |name: &'static str, value: Option<String>| {
            if let Some(value) = value {
                map.insert(name, value);
            }
        };

        put("domain", self.domain.clone());
        put("type", self.record_type.map(|t| t.as_str().to_string()));
        put("record_id", self.record_id.map(|v| v.to_string()));
        put("admin_mail", self.admin_mail.clone());
        put("content", self.content.clone());
        put("priority", self.priority.map(|v| v.to_string()));
        put("weight", self.weight.map(|v| v.to_string()));
        put("port", self.port.map(|v| v.to_string()));
        put("target", self.target.clone());
        put("subdomain", self.subdomain.clone());
        put("ttl", self.ttl.map(|v| v.to_string()));
        put("refresh", self.refresh.map(|v| v.to_string()));
        put("retry", self.retry.map(|v| v.to_string()));
        put("expire", self.expire.map(|v| v.to_string()));
        put("neg_cache", self.neg_cache.map(|v| v.to_string()));

        map.into_iter().collect()
    }

    /// Returns true if no field is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Encode as a URL query string (without the leading `?`)
    #[must_use]
    pub fn to_query(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (name, value) in self.pairs() {
            serializer.append_pair(name, &value);
        }
        serializer.finish()
    }

    /// Encode as an `application/x-www-form-urlencoded` request body
    #[must_use]
    pub fn to_body(&self) -> String {
        self.to_query()
    }
}
