//! Platform Crate - Technical Infrastructure
//!
//! Helpers with no game semantics:
//! - Secret comparison and random token suffixes
//! - Cookie building and extraction
//! - Client IP and bearer-token extraction
//! - Environment variable loading

pub mod client;
pub mod config;
pub mod cookie;
pub mod crypto;
