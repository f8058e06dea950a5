//! Workspace-level integration test crate for MatCalc-rs.
//!
//! The library target is empty; the golden-file tests live in `tests/`.
