//! Crate-internal test suites that cut across modules.
