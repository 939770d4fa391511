//! Check whether DNS records have propagated using DNS-over-HTTPS.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> dnsprop::Result<()> {
//!     // Single record
//!     let result = dnsprop::verify_dns_propagation("A", "example.com", "93.184.216.34").await?;
//!     println!("{}: {}", result.propagated, result.message);
//!
//!     // One entry per record type
//!     let results = dnsprop::verify_dns_propagation_group(&json!({
//!         "A": {"domain": "example.com", "expectedValue": "93.184.216.34"},
//!         "TXT": {"domain": "example.com", "expectedValue": "v=spf1 -all"}
//!     }))
//!     .await?;
//!
//!     for (record_type, result) in results.iter() {
//!         println!("{record_type}: {}", result.message);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! For a custom endpoint, timeout or retry policy build a
//! [`PropagationChecker`] directly.
//!
//! # Features
//!
//! - `default` - Uses rustls for TLS
//! - `rustls` - Use rustls for TLS (recommended)
//! - `native-tls` - Use system native TLS

#![doc(html_root_url = "https://docs.rs/dnsprop/1.0.0")]

// Re-export core types
pub use dnsprop_core::*;

// Re-export client
pub use dnsprop_client::{
    DohClient, DohClientBuilder, PropagationChecker, Resolver, RetryConfig, DEFAULT_ENDPOINT,
};

// Re-export runtime for convenience
pub use serde_json;
pub use tokio;

/// Check whether a single record has propagated to the default resolver.
///
/// `record_type` is a mnemonic such as `"A"`, `"CNAME"` or `"TXT"`. Failed
/// lookups are retried twice, one second apart.
pub async fn verify_dns_propagation(
    record_type: &str,
    domain: &str,
    expected_value: &str,
) -> Result<CheckResult> {
    let query = validate_single(record_type, domain, expected_value)?;
    PropagationChecker::doh()?.check_query(&query).await
}

/// Check a group of records, one entry per record type.
///
/// `queries` maps record type mnemonics to
/// `{"domain": ..., "expectedValue": ...}` objects. Only invalid input is
/// an error; an entry whose lookups fail comes back as not propagated.
pub async fn verify_dns_propagation_group(queries: &serde_json::Value) -> Result<GroupResult> {
    let group = validate_group(queries)?;
    PropagationChecker::doh()?.check_group(&group).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::assert_err;

    #[tokio::test]
    async fn rejects_bad_type_before_any_lookup() {
        let err = assert_err!(verify_dns_propagation("ANY", "example.com", "x").await);
        assert_eq!(err.kind(), ErrorKind::InvalidType);
    }

    #[tokio::test]
    async fn rejects_null_group_before_any_lookup() {
        let err = assert_err!(verify_dns_propagation_group(&serde_json::Value::Null).await);
        assert_eq!(err.code(), "INVALID_PARAM");

        let err = assert_err!(
            verify_dns_propagation_group(&json!({"A": {"domain": "example.com"}})).await
        );
        assert_eq!(err.code(), "INVALID_VALUE");
    }
}
