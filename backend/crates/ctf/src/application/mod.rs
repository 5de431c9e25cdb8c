//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod admin_players;
pub mod attempt_level;
pub mod caesar_prompt;
pub mod check_answer;
pub mod cipher_prompt;
pub mod config;
pub mod player_profile;
pub mod view_leaderboard;
