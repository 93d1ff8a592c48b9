//! clipview: clipboard history with an in-place JSON inspector.
//!
//! The binary wires the session from `cv-app` to the in-memory host from
//! `cv-infra` and drives it from a line shell.

pub mod bootstrap;
pub mod shell;
