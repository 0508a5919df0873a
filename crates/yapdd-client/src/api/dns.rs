//! DNS record endpoints.

use crate::PddClient;
use yapdd_core::{
    DeleteResponse, DnsParams, RecordListResponse, RecordResponse, RecordType, Result,
};

/// DNS API endpoints
///
/// Each call is a single request; retries are up to the caller. Dropping the
/// returned future aborts the request.
pub struct DnsApi<'a> {
    client: &'a PddClient,
}

impl<'a> DnsApi<'a> {
    pub(crate) const fn new(client: &'a PddClient) -> Self {
        Self { client }
    }

    /// Add a record of the given type to a domain
    ///
    /// `domain` and `record_type` override whatever `params` holds for them.
    pub async fn add(
        &self,
        domain: &str,
        record_type: RecordType,
        params: DnsParams,
    ) -> Result<RecordResponse> {
        let params = params.record_type(record_type).domain(domain);
        self.client.post_form("dns", "add", &params).await
    }

    /// List all records of a domain
    pub async fn list(&self, domain: &str) -> Result<RecordListResponse> {
        let params = DnsParams::new().domain(domain);
        self.client.get("dns", "list", &params).await
    }

    /// Edit an existing record
    ///
    /// Only the fields set in `params` are changed. The returned record's
    /// `operation` carries the server-side status, e.g. `editing`.
    pub async fn edit(
        &self,
        domain: &str,
        record_id: u32,
        params: DnsParams,
    ) -> Result<RecordResponse> {
        let params = params.record_id(record_id).domain(domain);
        self.client.post_form("dns", "edit", &params).await
    }

    /// Delete a record
    pub async fn delete(&self, domain: &str, record_id: u32) -> Result<DeleteResponse> {
        let params = DnsParams::new().record_id(record_id).domain(domain);
        self.client.post_form("dns", "del", &params).await
    }
}
