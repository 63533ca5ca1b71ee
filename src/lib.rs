//! Workspace-level integration tests for fibdev.
//!
//! The tests in `tests/` drive `fibdev-core` and `fibdev-device` together
//! against the golden data in `tests/testdata/`.
