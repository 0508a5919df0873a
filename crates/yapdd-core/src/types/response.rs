use super::DnsRecord;
use crate::{PddError, Result};
use serde::{Deserialize, Serialize};

/// Value of `success` on a successful reply
const SUCCESS_OK: &str = "ok";

/// Reply to `dns/add` and `dns/edit`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordResponse {
    /// Domain name
    #[serde(default)]
    pub domain: String,

    /// Identifier of the added or updated record
    #[serde(default)]
    pub record_id: u32,

    /// The added or updated record
    #[serde(default)]
    pub record: Option<DnsRecord>,

    /// `ok` or `error`
    #[serde(default)]
    pub success: String,

    /// Error code when `success` is `error`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

/// Reply to `dns/list`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordListResponse {
    /// Domain name
    #[serde(default)]
    pub domain: String,

    /// Records in server order
    #[serde(default)]
    pub records: Vec<DnsRecord>,

    /// `ok` or `error`
    #[serde(default)]
    pub success: String,

    /// Error code when `success` is `error`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

/// Reply to `dns/del`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Domain name
    #[serde(default)]
    pub domain: String,

    /// Identifier of the deleted record
    #[serde(default)]
    pub record_id: u32,

    /// `ok` or `error`
    #[serde(default)]
    pub success: String,

    /// Error code when `success` is `error`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub error: String,
}

macro_rules! impl_status {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $ty {
                /// Returns true if the service reported success
                #[must_use]
                pub fn is_success(&self) -> bool {
                    self.success == SUCCESS_OK
                }

                /// Turn a `success: "error"` reply into [`PddError::Api`]
                pub fn into_result(self) -> Result<Self> {
                    if self.is_success() {
                        Ok(self)
                    } else {
                        Err(PddError::Api {
                            code: if self.error.is_empty() {
                                self.success
                            } else {
                                self.error
                            },
                        })
                    }
                }
            }
        )+
    };
}

impl_status!(RecordResponse, RecordListResponse, DeleteResponse);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Priority, RecordType};
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_decode_list() {
        let resp: RecordListResponse = serde_json::from_str(
            r#"{
                "domain": "domain.com",
                "records": [
                    {
                        "record_id": 1,
                        "type": "A",
                        "domain": "domain.com",
                        "subdomain": "www",
                        "fqdn": "www.domain.com",
                        "content": "1.2.3.4",
                        "ttl": 900,
                        "priority": ""
                    },
                    {
                        "record_id": 2,
                        "type": "MX",
                        "domain": "domain.com",
                        "subdomain": "@",
                        "content": "mx.yandex.net.",
                        "priority": "10"
                    }
                ],
                "success": "ok"
            }"#,
        )
        .unwrap();

        assert!(resp.is_success());
        assert_eq!(resp.records.len(), 2);
        assert_eq!(resp.records[0].priority, Priority::NONE);
        assert_eq!(resp.records[1].record_type, RecordType::Mx);
        assert_eq!(resp.records[1].priority.get(), Some(10));
    }

    #[test]
    fn test_decode_delete() {
        let resp: DeleteResponse = serde_json::from_str(
            r#"{"domain": "domain.com", "record_id": 1, "success": "ok"}"#,
        )
        .unwrap();
        assert_eq!(resp.record_id, 1);
        assert_ok!(resp.into_result());
    }

    #[test]
    fn test_decode_add_reply() {
        let resp: RecordResponse = serde_json::from_str(
            r#"{
                "domain": "domain.com",
                "record_id": 7,
                "record": {"record_id": 7, "type": "TXT", "content": "v=spf1 -all"},
                "success": "ok"
            }"#,
        )
        .unwrap();
        assert_eq!(resp.record_id, 7);
        assert_eq!(resp.record.as_ref().map(|r| r.id), Some(7));

        let bare: RecordResponse = serde_json::from_str(r#"{"success": "ok"}"#).unwrap();
        assert_eq!(bare.record_id, 0);
    }

    #[test]
    fn test_error_reply() {
        let resp: RecordResponse = serde_json::from_str(
            r#"{"domain": "domain.com", "success": "error", "error": "no_auth"}"#,
        )
        .unwrap();
        assert!(!resp.is_success());
        assert!(resp.record.is_none());

        let err = resp.into_result().unwrap_err();
        assert!(matches!(err, PddError::Api { ref code } if code == "no_auth"));
    }

    #[test]
    fn test_missing_success_is_error() {
        assert_err!(RecordListResponse::default().into_result());
        let err = DeleteResponse::default().into_result().unwrap_err();
        assert_eq!(err.to_string(), "API error: ");
    }

    #[test]
    fn test_bad_priority_fails_whole_reply() {
        let result = serde_json::from_str::<RecordResponse>(
            r#"{"record": {"record_id": 1, "type": "MX", "priority": "abc"}, "success": "ok"}"#,
        );
        assert!(result.is_err());
    }
}
