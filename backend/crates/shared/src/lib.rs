//! Shared Kernel
//!
//! Vocabulary shared by every crate in the game backend:
//! - The unified error type and its HTTP classification
//! - The opaque player identifier carried in the `player-id` cookie
//!
//! Only things whose meaning is stable across the whole workspace live here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
