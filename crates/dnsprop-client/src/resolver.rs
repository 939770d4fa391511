//! The resolver seam used by the checker.

use async_trait::async_trait;
use dnsprop_core::{DohResponse, RecordType, Result};

/// Performs one DNS lookup on behalf of the checker
///
/// Implementations return the resolver's response only when it reported
/// success; transport and resolver failures come back as errors so the
/// checker can retry them.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Look up `record_type` records for an already-normalized `domain`
    async fn resolve(&self, domain: &str, record_type: RecordType) -> Result<DohResponse>;
}

#[async_trait]
impl<R: Resolver + ?Sized> Resolver for &R {
    async fn resolve(&self, domain: &str, record_type: RecordType) -> Result<DohResponse> {
        (**self).resolve(domain, record_type).await
    }
}
