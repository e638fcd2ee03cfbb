//! Assessment scoring and career matching for psychometric questionnaires.
//!
//! The [`engine`] module is the core: a pure, stateless computation turning
//! raw answers, a question catalog, and a career catalog into a typed score
//! document, a ranked match list, and a narrative bundle. [`intake`] loads
//! those inputs from the hosting application's export files, and the binary
//! in `main.rs` wires both behind a small CLI.

pub mod config;
pub mod engine;
pub mod error;
pub mod intake;
pub mod telemetry;
