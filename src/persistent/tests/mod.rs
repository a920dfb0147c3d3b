//! Unit tests for the persistent record capability.
//!
//! Tests run against two throwaway entities declared in [`support`]: a
//! soft-deletable note and a hard-delete-only tag.
