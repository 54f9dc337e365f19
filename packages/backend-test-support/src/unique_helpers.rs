//! Test helpers for generating unique test data
//!
//! ULID-based helpers that keep test rooms and players isolated between runs.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let id1 = unique_str("room");
/// let id2 = unique_str("room");
/// assert_ne!(id1, id2);
/// assert!(id1.starts_with("room-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Generate a unique player uid with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_uid;
///
/// let uid1 = unique_uid("alice");
/// let uid2 = unique_uid("alice");
/// assert_ne!(uid1, uid2);
/// ```
pub fn unique_uid(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}
