//! Property-based tests for level resolution using proptest
//!
//! Pure functions only; no process-wide state involved.

use hotlog::LogLevel;
use proptest::prelude::*;

const SCALE: [&str; 8] = [
    "all", "trace", "debug", "info", "warn", "error", "fatal", "off",
];

proptest! {
    /// Resolution is total: any string input yields a level, never a panic.
    #[test]
    fn test_resolve_never_panics(name in ".*") {
        let _ = LogLevel::resolve(&name);
    }

    /// Every name in the scale round-trips through resolve, in any casing.
    #[test]
    fn test_scale_names_round_trip(ix in 0usize..8, upper in any::<bool>()) {
        let name = SCALE[ix];
        let input = if upper { name.to_uppercase() } else { name.to_string() };
        prop_assert_eq!(LogLevel::resolve(&input).as_str(), name);
    }

    /// Unknown names resolve stricter than `off`, so nothing is ever enabled
    /// by a typo.
    #[test]
    fn test_unknown_names_resolve_silent(name in "[a-z]{1,12}") {
        prop_assume!(!SCALE.contains(&name.as_str()));
        let level = LogLevel::resolve(&name);
        prop_assert_eq!(level, LogLevel::Silent);
        prop_assert!(level > LogLevel::Off);
    }

    /// Threshold comparisons agree with the raw index ordering.
    #[test]
    fn test_ordering_matches_index(a in 0u8..9, b in 0u8..9) {
        let level_a = LogLevel::from_index(a);
        let level_b = LogLevel::from_index(b);
        prop_assert_eq!(level_a <= level_b, a <= b);
        prop_assert_eq!(level_a < level_b, a < b);
    }

    /// Decoding an index and re-encoding it is stable within the scale.
    #[test]
    fn test_index_decode_stable(ix in 0u8..9) {
        let level = LogLevel::from_index(ix);
        prop_assert_eq!(level as u8, ix);
    }
}
