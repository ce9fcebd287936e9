//! Single-component unit tests.

mod snapshot_tests;
