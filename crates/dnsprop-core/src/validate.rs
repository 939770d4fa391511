//! Input validation for single and group checks.
//!
//! Validation runs before any network call and fails fast on the first
//! problem found.

use crate::error::{CheckError, ErrorKind, Result};
use crate::types::{Query, QueryGroup, RecordType};
use serde_json::Value;

/// JSON key holding the domain of a group entry
const DOMAIN_KEY: &str = "domain";

/// JSON key holding the expected value of a group entry
const EXPECTED_VALUE_KEY: &str = "expectedValue";

/// Validate the arguments of a single check.
///
/// Checks the record type, then the domain, then the expected value.
pub fn validate_single(record_type: &str, domain: &str, expected_value: &str) -> Result<Query> {
    let record_type: RecordType = record_type.parse()?;
    check_domain(domain)?;
    check_value(expected_value)?;

    Ok(Query::from_parts(
        record_type,
        domain.to_string(),
        expected_value.to_string(),
    ))
}

pub(crate) fn check_domain(domain: &str) -> Result<()> {
    if domain.is_empty() {
        return Err(CheckError::new(
            ErrorKind::InvalidDomain,
            "Domain cannot be empty",
        ));
    }
    Ok(())
}

pub(crate) fn check_value(expected_value: &str) -> Result<()> {
    if expected_value.is_empty() {
        return Err(CheckError::new(
            ErrorKind::InvalidValue,
            "Expected value cannot be empty",
        ));
    }
    Ok(())
}

/// Validate one typed group entry.
pub(crate) fn validate_entry(
    record_type: RecordType,
    domain: String,
    expected_value: String,
) -> Result<Query> {
    if domain.is_empty() {
        return Err(invalid_domain(record_type.as_str()));
    }
    if expected_value.is_empty() {
        return Err(invalid_value(record_type.as_str()));
    }
    Ok(Query::from_parts(record_type, domain, expected_value))
}

/// Validate an untyped group mapping.
///
/// The input must be a non-empty JSON object whose keys are record type
/// mnemonics and whose values are objects with non-empty string
/// `domain` and `expectedValue` fields. Entries are checked in key order.
pub fn validate_group(value: &Value) -> Result<QueryGroup> {
    let Value::Object(map) = value else {
        return Err(CheckError::new(
            ErrorKind::InvalidParam,
            format!("Not a valid DNS query object: {value}"),
        ));
    };

    if map.is_empty() {
        return Err(CheckError::new(
            ErrorKind::InvalidParam,
            "DNS query object cannot be empty",
        ));
    }

    let mut group = QueryGroup::new();
    for (key, entry) in map {
        let record_type = key.parse::<RecordType>().map_err(|_| {
            CheckError::new(
                ErrorKind::InvalidRecordType,
                format!("Invalid DNS record type: {key}"),
            )
        })?;

        let Value::Object(fields) = entry else {
            return Err(CheckError::new(
                ErrorKind::InvalidEntryStructure,
                format!(
                    "Entry for {key} must be an object with domain and expectedValue properties"
                ),
            ));
        };

        let domain = non_empty_str(fields.get(DOMAIN_KEY)).ok_or_else(|| invalid_domain(key))?;
        let expected_value =
            non_empty_str(fields.get(EXPECTED_VALUE_KEY)).ok_or_else(|| invalid_value(key))?;

        group.push(Query::from_parts(
            record_type,
            domain.to_string(),
            expected_value.to_string(),
        ));
    }

    Ok(group)
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

fn invalid_domain(key: &str) -> CheckError {
    CheckError::new(
        ErrorKind::InvalidDomain,
        format!("Invalid or missing domain for {key}"),
    )
}

fn invalid_value(key: &str) -> CheckError {
    CheckError::new(
        ErrorKind::InvalidValue,
        format!("Invalid or missing expected value for {key}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kind_of(value: &Value) -> ErrorKind {
        validate_group(value).unwrap_err().kind()
    }

    #[test]
    fn single_checks_in_order() {
        assert_eq!(
            validate_single("BOGUS", "", "").unwrap_err().kind(),
            ErrorKind::InvalidType
        );
        assert_eq!(
            validate_single("A", "", "").unwrap_err().kind(),
            ErrorKind::InvalidDomain
        );
        assert_eq!(
            validate_single("A", "example.com", "").unwrap_err().kind(),
            ErrorKind::InvalidValue
        );

        let query = validate_single("CNAME", "www.example.com", "example.net.").unwrap();
        assert_eq!(query.record_type(), RecordType::CNAME);
    }

    #[test]
    fn group_must_be_non_empty_object() {
        assert_eq!(kind_of(&json!([])), ErrorKind::InvalidParam);
        assert_eq!(kind_of(&Value::Null), ErrorKind::InvalidParam);
        assert_eq!(kind_of(&json!("A")), ErrorKind::InvalidParam);
        assert_eq!(kind_of(&json!(42)), ErrorKind::InvalidParam);
        assert_eq!(kind_of(&json!({})), ErrorKind::InvalidParam);
    }

    #[test]
    fn group_entry_errors() {
        assert_eq!(
            kind_of(&json!({"DNSKEY": {"domain": "a.com", "expectedValue": "x"}})),
            ErrorKind::InvalidRecordType
        );
        assert_eq!(kind_of(&json!({"A": null})), ErrorKind::InvalidEntryStructure);
        assert_eq!(
            kind_of(&json!({"A": ["a.com", "1.2.3.4"]})),
            ErrorKind::InvalidEntryStructure
        );
        assert_eq!(
            kind_of(&json!({"A": {"domain": 7, "expectedValue": "1.2.3.4"}})),
            ErrorKind::InvalidDomain
        );
        assert_eq!(
            kind_of(&json!({"A": {"domain": "a.com"}})),
            ErrorKind::InvalidValue
        );
        assert_eq!(
            kind_of(&json!({"A": {"domain": "a.com", "expectedValue": ""}})),
            ErrorKind::InvalidValue
        );
    }

    #[test]
    fn group_fails_on_first_bad_entry() {
        let value = json!({
            "A": {"domain": "a.com", "expectedValue": "1.2.3.4"},
            "MX": {"domain": ""},
            "NOPE": {}
        });

        let err = validate_group(&value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDomain);
        assert_eq!(err.message(), "Invalid or missing domain for MX");
    }

    #[test]
    fn group_keeps_key_order() {
        let value = json!({
            "TXT": {"domain": "example.com", "expectedValue": "\"hello\""},
            "A": {"domain": "example.com", "expectedValue": "1.2.3.4"},
            "MX": {"domain": "example.com", "expectedValue": "10 mail.example.com."}
        });

        let group = validate_group(&value).unwrap();
        let order: Vec<_> = group.iter().map(Query::record_type).collect();
        assert_eq!(order, vec![RecordType::TXT, RecordType::A, RecordType::MX]);
    }
}
