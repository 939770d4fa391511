use super::{DohResponse, RecordType};
use crate::error::CheckError;
use crate::matcher::matches;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Message for a record that matched
pub const PROPAGATED_MESSAGE: &str = "DNS record has propagated successfully";

/// Outcome of checking one record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// Whether an answer matched the expected value
    pub propagated: bool,

    /// Resolver response the decision was based on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_response: Option<DohResponse>,

    /// Human-readable summary
    pub message: String,
}

impl CheckResult {
    /// Match a resolver response against the expected value
    #[must_use]
    pub fn from_response(
        response: DohResponse,
        expected_value: &str,
        record_type: RecordType,
    ) -> Self {
        let propagated = matches(&response, expected_value, record_type);
        let message = if propagated {
            PROPAGATED_MESSAGE.to_string()
        } else {
            format!("DNS record with value \"{expected_value}\" hasn't propagated yet")
        };

        Self {
            propagated,
            raw_response: Some(response),
            message,
        }
    }

    /// Result for a group entry whose query kept failing
    #[must_use]
    pub fn failed(record_type: RecordType, error: &CheckError) -> Self {
        Self {
            propagated: false,
            raw_response: None,
            message: format!("Error checking {record_type} record: {}", error.message()),
        }
    }
}

/// Per-record-type outcomes of a group check, in query order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupResult {
    entries: Vec<(RecordType, CheckResult)>,
}

impl GroupResult {
    /// Result for a record type
    #[must_use]
    pub fn get(&self, record_type: RecordType) -> Option<&CheckResult> {
        self.entries
            .iter()
            .find(|(t, _)| *t == record_type)
            .map(|(_, r)| r)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if every entry propagated
    #[must_use]
    pub fn all_propagated(&self) -> bool {
        self.entries.iter().all(|(_, r)| r.propagated)
    }

    /// Iterate over `(record type, result)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (RecordType, &CheckResult)> {
        self.entries.iter().map(|(t, r)| (*t, r))
    }
}

impl FromIterator<(RecordType, CheckResult)> for GroupResult {
    fn from_iter<I: IntoIterator<Item = (RecordType, CheckResult)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for GroupResult {
    type Item = (RecordType, CheckResult);
    type IntoIter = std::vec::IntoIter<(RecordType, CheckResult)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for GroupResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (record_type, result) in &self.entries {
            map.serialize_entry(record_type.as_str(), result)?;
        }
        map.end()
    }
}
