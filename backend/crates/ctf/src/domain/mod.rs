//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - The puzzle catalog and the per-level puzzle kinds
//! - Answer normalization and validation
//! - Caesar and substitution ciphers
//! - Player and cipher records, progress clamping, level gating
//! - Leaderboard ranking
//! - Repository traits (the storage port)

pub mod answer;
pub mod caesar;
pub mod catalog;
pub mod entities;
pub mod leaderboard;
pub mod progress;
pub mod repository;
pub mod substitution;
pub mod validator;
