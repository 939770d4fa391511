//! DNS-over-HTTPS client and propagation checker.
//!
//! This crate provides [`DohClient`] for querying a JSON DNS-over-HTTPS
//! resolver and [`PropagationChecker`], which validates input, queries the
//! resolver with bounded retry and compares the answers.

#![doc(html_root_url = "https://docs.rs/dnsprop-client/1.0.0")]

mod checker;
mod client;
mod config;
mod resolver;

pub use checker::PropagationChecker;
pub use client::{DohClient, DohClientBuilder, DEFAULT_ENDPOINT};
pub use config::*;
pub use dnsprop_core::{CheckError, ErrorKind, Result};
pub use resolver::Resolver;
