use super::RecordType;
use serde::{Deserialize, Serialize};

/// JSON body returned by a DNS-over-HTTPS resolver
///
/// Field names follow the `application/dns-json` format used by public
/// resolvers such as `dns.google`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DohResponse {
    /// DNS response code (0 = NOERROR)
    #[serde(rename = "Status")]
    pub status: u32,

    /// Response was truncated
    #[serde(rename = "TC", default, skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,

    /// Recursion desired
    #[serde(rename = "RD", default, skip_serializing_if = "Option::is_none")]
    pub recursion_desired: Option<bool>,

    /// Recursion available
    #[serde(rename = "RA", default, skip_serializing_if = "Option::is_none")]
    pub recursion_available: Option<bool>,

    /// Every record in the answer was DNSSEC-validated
    #[serde(rename = "AD", default, skip_serializing_if = "Option::is_none")]
    pub authenticated_data: Option<bool>,

    /// DNSSEC validation was disabled for this query
    #[serde(rename = "CD", default, skip_serializing_if = "Option::is_none")]
    pub checking_disabled: Option<bool>,

    /// Echo of the question
    #[serde(rename = "Question", default, skip_serializing_if = "Option::is_none")]
    pub question: Option<Vec<DohQuestion>>,

    /// Answer records
    #[serde(rename = "Answer", default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<Vec<DohAnswer>>,

    /// Authority records (usually the SOA on NXDOMAIN/NODATA)
    #[serde(rename = "Authority", default, skip_serializing_if = "Option::is_none")]
    pub authority: Option<Vec<DohAnswer>>,

    /// Free-form diagnostic from the resolver
    #[serde(rename = "Comment", default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl DohResponse {
    /// Returns true if the resolver reported NOERROR
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == 0
    }

    /// Answer records, empty when the resolver sent none
    #[must_use]
    pub fn answers(&self) -> &[DohAnswer] {
        self.answer.as_deref().unwrap_or_default()
    }
}

/// Question section entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DohQuestion {
    /// Queried name (fully qualified)
    pub name: String,

    /// Numeric RR type
    #[serde(rename = "type")]
    pub record_type: u16,
}

/// Resource record in the answer or authority section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DohAnswer {
    /// Owner name
    #[serde(default)]
    pub name: String,

    /// Numeric RR type
    #[serde(rename = "type", default)]
    pub record_type: u16,

    /// Time to live in seconds
    #[serde(rename = "TTL", default)]
    pub ttl: u32,

    /// Record data in presentation format
    pub data: String,
}

impl DohAnswer {
    /// Record type, if it is one of the supported types
    #[must_use]
    pub fn kind(&self) -> Option<RecordType> {
        RecordType::from_code(self.record_type)
    }
}
