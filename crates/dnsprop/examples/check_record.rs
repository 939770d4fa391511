//! Check a record and a group of records against the public resolver.
//!
//! Run with: cargo run -p dnsprop --example check_record

use dnsprop::serde_json::json;
use dnsprop::{PropagationChecker, Result, RetryConfig};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    // One record with the default settings
    println!("=== Single record ===");
    let result =
        dnsprop::verify_dns_propagation("A", "https://www.example.com", "93.184.216.34").await?;
    println!("Propagated: {}", result.propagated);
    println!("Message: {}", result.message);
    if let Some(response) = &result.raw_response {
        for answer in response.answers() {
            let kind = answer.kind().map_or("?", |t| t.as_str());
            println!("  {} {kind} {} (TTL {})", answer.name, answer.data, answer.ttl);
        }
    }
    println!();

    // Several record types with a custom retry policy
    println!("=== Group ===");
    let retry = RetryConfig::new()
        .max_retries(1)
        .delay(Duration::from_millis(500));
    let checker = PropagationChecker::doh()?.with_retry(retry);

    let results = checker
        .check_group_json(&json!({
            "A": {"domain": "example.com", "expectedValue": "93.184.216.34"},
            "TXT": {"domain": "example.com", "expectedValue": "v=spf1 -all"},
            "NS": {"domain": "example.com", "expectedValue": "a.iana-servers.net."}
        }))
        .await?;

    for (record_type, result) in results.iter() {
        let mark = if result.propagated { "ok" } else { "--" };
        println!("[{mark}] {record_type}: {}", result.message);
    }

    Ok(())
}
