//! Propagation checks with bounded retry.

use crate::client::DohClient;
use crate::config::RetryConfig;
use crate::resolver::Resolver;
use dnsprop_core::{
    validate_group, validate_single, CheckError, CheckResult, ErrorKind, GroupResult, Query,
    QueryGroup, Result,
};
use tracing::{debug, warn};

/// Checks whether DNS records have propagated to a resolver
///
/// Failed lookups are retried with a fixed delay. Validation failures are
/// returned immediately and never reach the resolver.
#[derive(Clone)]
pub struct PropagationChecker<R = DohClient> {
    resolver: R,
    retry: RetryConfig,
}

impl PropagationChecker<DohClient> {
    /// Checker backed by the default DNS-over-HTTPS endpoint
    pub fn doh() -> Result<Self> {
        Ok(Self::new(DohClient::new()?))
    }
}

impl<R: Resolver> PropagationChecker<R> {
    /// Create a checker using `resolver` and the default retry policy
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            retry: RetryConfig::default(),
        }
    }

    /// Replace the retry policy
    #[must_use]
    pub const fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Resolver in use
    pub const fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Retry policy in use
    pub const fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    /// Check a single record.
    ///
    /// `record_type` is a record type mnemonic such as `"A"` or `"TXT"`.
    /// Fails with the last resolver error once every attempt has failed.
    pub async fn check_single(
        &self,
        record_type: &str,
        domain: &str,
        expected_value: &str,
    ) -> Result<CheckResult> {
        let query = validate_single(record_type, domain, expected_value)?;
        self.check_query(&query).await
    }

    /// Check an already-validated query
    pub async fn check_query(&self, query: &Query) -> Result<CheckResult> {
        let mut attempt = 0;

        loop {
            debug!(
                record_type = %query.record_type(),
                domain = query.normalized_domain(),
                attempt,
                "checking propagation"
            );

            match self.query_once(query).await {
                Ok(result) => return Ok(result),
                Err(err) if attempt >= self.retry.max_retries => return Err(err),
                Err(err) => {
                    attempt += 1;
                    warn!(
                        record_type = %query.record_type(),
                        error = %err,
                        attempt,
                        max_retries = self.retry.max_retries,
                        "lookup failed, retrying"
                    );
                    tokio::time::sleep(self.retry.delay).await;
                }
            }
        }
    }

    /// Validate an untyped group mapping, then check every entry
    ///
    /// See [`QueryGroup::from_json`] for the accepted shape.
    pub async fn check_group_json(&self, queries: &serde_json::Value) -> Result<GroupResult> {
        let group = validate_group(queries)?;
        self.check_group(&group).await
    }

    /// Check every entry of a group, one after another.
    ///
    /// An entry whose lookups keep failing is reported as not propagated
    /// and does not stop the remaining entries. The only error is an
    /// empty group.
    pub async fn check_group(&self, queries: &QueryGroup) -> Result<GroupResult> {
        if queries.is_empty() {
            return Err(CheckError::new(
                ErrorKind::InvalidParam,
                "DNS query object cannot be empty",
            ));
        }

        let mut results = Vec::with_capacity(queries.len());
        for query in queries {
            let record_type = query.record_type();
            let result = match self.check_query(query).await {
                Ok(result) => result,
                Err(err) => {
                    warn!(record_type = %record_type, error = %err, "giving up on record");
                    CheckResult::failed(record_type, &err)
                }
            };
            results.push((record_type, result));
        }

        Ok(results.into_iter().collect())
    }

    async fn query_once(&self, query: &Query) -> Result<CheckResult> {
        let response = self
            .resolver
            .resolve(query.normalized_domain(), query.record_type())
            .await?;

        Ok(CheckResult::from_response(
            response,
            query.expected_value(),
            query.record_type(),
        ))
    }
}
