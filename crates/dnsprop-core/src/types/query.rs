use super::RecordType;
use crate::error::Result;
use crate::normalize::normalize_domain;
use crate::validate;

/// A validated propagation query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    record_type: RecordType,
    domain: String,
    expected_value: String,
}

impl Query {
    /// Build a query from already-validated parts
    pub(crate) const fn from_parts(
        record_type: RecordType,
        domain: String,
        expected_value: String,
    ) -> Self {
        Self {
            record_type,
            domain,
            expected_value,
        }
    }

    /// Validate and build a query
    pub fn new(
        record_type: RecordType,
        domain: impl Into<String>,
        expected_value: impl Into<String>,
    ) -> Result<Self> {
        let domain = domain.into();
        let expected_value = expected_value.into();
        validate::check_domain(&domain)?;
        validate::check_value(&expected_value)?;
        Ok(Self::from_parts(record_type, domain, expected_value))
    }

    /// Record type to look up
    #[must_use]
    pub const fn record_type(&self) -> RecordType {
        self.record_type
    }

    /// Domain exactly as supplied
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Domain with any scheme and `www.` prefix removed
    #[must_use]
    pub fn normalized_domain(&self) -> &str {
        normalize_domain(&self.domain)
    }

    /// Value the record should hold once propagated
    #[must_use]
    pub fn expected_value(&self) -> &str {
        &self.expected_value
    }
}

/// Ordered set of queries keyed by record type
///
/// Iteration follows insertion order. Inserting a record type that is
/// already present replaces that entry without moving it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryGroup {
    entries: Vec<Query>,
}

impl QueryGroup {
    /// Create an empty group
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Validate and build a group from an untyped JSON mapping
    ///
    /// The mapping has the shape
    /// `{"A": {"domain": "...", "expectedValue": "..."}, ...}`.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        validate::validate_group(value)
    }

    /// Validate and add (or replace) the entry for `record_type`
    pub fn insert(
        &mut self,
        record_type: RecordType,
        domain: impl Into<String>,
        expected_value: impl Into<String>,
    ) -> Result<()> {
        let query = validate::validate_entry(record_type, domain.into(), expected_value.into())?;
        self.push(query);
        Ok(())
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(
        mut self,
        record_type: RecordType,
        domain: impl Into<String>,
        expected_value: impl Into<String>,
    ) -> Result<Self> {
        self.insert(record_type, domain, expected_value)?;
        Ok(self)
    }

    pub(crate) fn push(&mut self, query: Query) {
        match self
            .entries
            .iter_mut()
            .find(|q| q.record_type == query.record_type)
        {
            Some(existing) => *existing = query,
            None => self.entries.push(query),
        }
    }

    /// Entry for a record type
    #[must_use]
    pub fn get(&self, record_type: RecordType) -> Option<&Query> {
        self.entries.iter().find(|q| q.record_type == record_type)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the group has no entries
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Query> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a QueryGroup {
    type Item = &'a Query;
    type IntoIter = std::slice::Iter<'a, Query>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn query_normalizes_lazily() {
        let query = Query::new(RecordType::A, "https://www.example.com", "1.2.3.4").unwrap();
        assert_eq!(query.domain(), "https://www.example.com");
        assert_eq!(query.normalized_domain(), "example.com");
    }

    #[test]
    fn query_rejects_empty_fields() {
        let err = Query::new(RecordType::A, "", "1.2.3.4").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDomain);

        let err = Query::new(RecordType::A, "example.com", "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidValue);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut group = QueryGroup::new()
            .with(RecordType::TXT, "example.com", "old")
            .unwrap()
            .with(RecordType::A, "example.com", "1.2.3.4")
            .unwrap();

        group.insert(RecordType::TXT, "example.com", "new").unwrap();

        let order: Vec<_> = group.iter().map(Query::record_type).collect();
        assert_eq!(order, vec![RecordType::TXT, RecordType::A]);
        assert_eq!(group.get(RecordType::TXT).unwrap().expected_value(), "new");
    }

    #[test]
    fn insert_uses_group_messages() {
        let err = QueryGroup::new()
            .insert(RecordType::MX, "", "10 mail.example.com.")
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidDomain);
        assert_eq!(err.message(), "Invalid or missing domain for MX");
    }
}
