//! Globals and rule overrides for the test-directory config.

use std::collections::BTreeMap;

/// Assertion helpers that test files use without importing.
pub const TEST_GLOBALS: &[(&str, bool)] = &[("expect", false), ("assert", false), ("sinon", false)];

/// Rules that fight common test idioms.
pub const TEST_RULE_OVERRIDES: &[(&str, u8)] = &[
    // chai style `expect(x).to.be.empty`
    ("no-unused-expressions", 0),
    // values are put in scope for beforeEach
    ("init-declarations", 0),
];

/// A fresh copy of [`TEST_GLOBALS`].
pub fn test_globals() -> BTreeMap<String, bool> {
    TEST_GLOBALS
        .iter()
        .map(|(name, writable)| (name.to_string(), *writable))
        .collect()
}

/// A fresh copy of [`TEST_RULE_OVERRIDES`].
pub fn test_rules() -> BTreeMap<String, u8> {
    TEST_RULE_OVERRIDES
        .iter()
        .map(|(rule, level)| (rule.to_string(), *level))
        .collect()
}
