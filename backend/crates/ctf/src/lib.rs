//! CTF Puzzle Game Backend
//!
//! Clean Architecture structure:
//! - `domain/` - Puzzle catalog, validator, ciphers, progress, ranking, repository traits
//! - `application/` - Use cases
//! - `infra/` - Filesystem, Redis and in-memory record stores, catalog loading
//! - `presentation/` - HTTP handlers
//!
//! ## Trust Model
//! - The server owns answer checking and the stored progress cursor
//! - The level candidate sent by the client is clamped, not verified
//! - Client-adjudicated levels are accepted as reported
//! - Admin routes share one bearer secret; there are no admin accounts

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CtfConfig;
pub use error::{CtfError, CtfResult};
pub use infra::catalog::CatalogSource;
pub use infra::store::RecordStore;
pub use presentation::router::{ctf_router, ctf_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};
