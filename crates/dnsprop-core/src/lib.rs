//! Core types for DNS propagation checks.
//!
//! This crate holds everything that does not touch the network:
//!
//! - **Types**: record types, queries, resolver responses and check results
//! - **Errors**: [`CheckError`] tagged with an [`ErrorKind`]
//! - **Validation**: [`validate_single`] and [`validate_group`]
//! - **Matching**: [`matches`] compares resolver answers to an expected value
//!
//! # Example
//!
//! ```rust
//! use dnsprop_core::{normalize_domain, validate_single, RecordType};
//!
//! let query = validate_single("A", "https://www.example.com", "93.184.216.34")?;
//! assert_eq!(query.record_type(), RecordType::A);
//! assert_eq!(normalize_domain(query.domain()), "example.com");
//! # Ok::<(), dnsprop_core::CheckError>(())
//! ```

#![doc(html_root_url = "https://docs.rs/dnsprop-core/1.0.0")]

mod error;
mod matcher;
mod normalize;
pub mod types;
mod validate;

pub use error::{CheckError, ErrorKind, Result};
pub use matcher::matches;
pub use normalize::normalize_domain;
pub use types::*;
pub use validate::{validate_group, validate_single};
