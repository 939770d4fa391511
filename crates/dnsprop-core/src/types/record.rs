use crate::error::{CheckError, ErrorKind};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// DNS record types that can be checked for propagation
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RecordType {
    /// IPv4 address
    A,
    /// IPv6 address
    AAAA,
    /// Canonical name
    CNAME,
    /// Mail exchange
    MX,
    /// Name server
    NS,
    /// Text
    TXT,
    /// Service locator
    SRV,
    /// Pointer (reverse lookup)
    PTR,
    /// Start of authority
    SOA,
    /// Certification authority authorization
    CAA,
}

impl RecordType {
    /// Every supported record type
    pub const ALL: [Self; 10] = [
        Self::A,
        Self::AAAA,
        Self::CNAME,
        Self::MX,
        Self::NS,
        Self::TXT,
        Self::SRV,
        Self::PTR,
        Self::SOA,
        Self::CAA,
    ];

    /// Record type mnemonic as sent to the resolver
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::AAAA => "AAAA",
            Self::CNAME => "CNAME",
            Self::MX => "MX",
            Self::NS => "NS",
            Self::TXT => "TXT",
            Self::SRV => "SRV",
            Self::PTR => "PTR",
            Self::SOA => "SOA",
            Self::CAA => "CAA",
        }
    }

    /// Numeric RR type code (RFC 1035 and successors)
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::A => 1,
            Self::NS => 2,
            Self::CNAME => 5,
            Self::SOA => 6,
            Self::PTR => 12,
            Self::MX => 15,
            Self::TXT => 16,
            Self::AAAA => 28,
            Self::SRV => 33,
            Self::CAA => 257,
        }
    }

    /// Look up a record type by its numeric code
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    /// Returns true if answers of this type compare without quote characters
    #[must_use]
    pub const fn is_quoted(self) -> bool {
        matches!(self, Self::TXT)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| {
                CheckError::new(ErrorKind::InvalidType, format!("Invalid DNS record type: {s}"))
            })
    }
}
