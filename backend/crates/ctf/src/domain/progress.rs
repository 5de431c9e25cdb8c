//! Progress Tracker rules
//!
//! Levels are 1-based; `N + 1` is the completed sentinel.

use serde::Serialize;

use crate::domain::entities::PlayerRecord;

/// Level reported for a player with no record
pub const FIRST_LEVEL: u32 = 1;

/// How a candidate level is reconciled with the stored one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdvancePolicy {
    /// Store the clamped candidate as-is, even if it is lower
    #[default]
    TrustClient,
    /// Never move backwards: `max(stored, clamp(candidate))`
    Monotonic,
}

/// Clamp any candidate (negative, zero, huge) into `[1, total_levels + 1]`
pub fn clamp_level(candidate: i64, total_levels: u32) -> u32 {
    let ceiling = i64::from(total_levels) + 1;
    candidate.clamp(i64::from(FIRST_LEVEL), ceiling) as u32
}

/// Level to persist for `candidate` given what is currently stored
pub fn next_level(
    stored: Option<u32>,
    candidate: i64,
    total_levels: u32,
    policy: AdvancePolicy,
) -> u32 {
    let clamped = clamp_level(candidate, total_levels);
    match (policy, stored) {
        (AdvancePolicy::Monotonic, Some(stored)) => {
            clamped.max(clamp_level(i64::from(stored), total_levels))
        }
        _ => clamped,
    }
}

/// Current level of a possibly absent record, clamped into `[1, N + 1]`.
/// Stored values may predate the current catalog.
pub fn current_level(record: Option<&PlayerRecord>, total_levels: u32) -> u32 {
    record.map_or(FIRST_LEVEL, |r| {
        clamp_level(i64::from(r.current_level), total_levels)
    })
}

/// Gate decision for opening a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelAccess {
    Open,
    /// Above the player's cursor; the client sends them back to level 1
    Locked,
    /// Player finished, or asked for a level past the end
    Completed,
}

pub fn level_access(current_level: u32, requested: u32, total_levels: u32) -> LevelAccess {
    if current_level > total_levels || requested > total_levels {
        LevelAccess::Completed
    } else if requested > current_level {
        LevelAccess::Locked
    } else {
        LevelAccess::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_clamp_bounds() {
        assert_eq!(clamp_level(-5, 9), 1);
        assert_eq!(clamp_level(0, 9), 1);
        assert_eq!(clamp_level(4, 9), 4);
        assert_eq!(clamp_level(10, 9), 10);
        assert_eq!(clamp_level(109, 9), 10);
        assert_eq!(clamp_level(i64::MAX, 9), 10);
        assert_eq!(clamp_level(i64::MIN, 9), 1);
    }

    #[test]
    fn test_trust_client_allows_going_back() {
        assert_eq!(next_level(Some(7), 2, 9, AdvancePolicy::TrustClient), 2);
        assert_eq!(next_level(None, 2, 9, AdvancePolicy::TrustClient), 2);
    }

    #[test]
    fn test_monotonic_keeps_highest() {
        assert_eq!(next_level(Some(7), 2, 9, AdvancePolicy::Monotonic), 7);
        assert_eq!(next_level(Some(7), 8, 9, AdvancePolicy::Monotonic), 8);
        assert_eq!(next_level(None, -3, 9, AdvancePolicy::Monotonic), 1);
        // stale out-of-range value from an older catalog
        assert_eq!(next_level(Some(40), 3, 9, AdvancePolicy::Monotonic), 10);
    }

    #[test]
    fn test_current_level_defaults_to_first() {
        assert_eq!(current_level(None, 9), 1);
        let record = PlayerRecord::new("", 0, Utc::now());
        assert_eq!(current_level(Some(&record), 9), 1);
        let record = PlayerRecord::new("", 6, Utc::now());
        assert_eq!(current_level(Some(&record), 9), 6);
    }

    #[test]
    fn test_current_level_caps_stale_records() {
        let record = PlayerRecord::new("", 40, Utc::now());
        assert_eq!(current_level(Some(&record), 9), 10);
        let record = PlayerRecord::new("", u32::MAX, Utc::now());
        assert_eq!(current_level(Some(&record), 9), 10);
    }

    #[test]
    fn test_level_access() {
        assert_eq!(level_access(3, 2, 9), LevelAccess::Open);
        assert_eq!(level_access(3, 3, 9), LevelAccess::Open);
        assert_eq!(level_access(3, 4, 9), LevelAccess::Locked);
        assert_eq!(level_access(10, 1, 9), LevelAccess::Completed);
        assert_eq!(level_access(1, 10, 9), LevelAccess::Completed);
    }

    #[test]
    fn test_level_access_json() {
        assert_eq!(
            serde_json::to_string(&LevelAccess::Locked).unwrap(),
            r#""locked""#
        );
    }
}
