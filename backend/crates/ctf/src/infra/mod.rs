//! Infrastructure Layer - Storage and catalog loading

pub mod catalog;
pub mod fs;
pub mod memory;
pub mod redis;
pub mod store;
