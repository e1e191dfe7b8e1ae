//! Hosted documentation discovery
//!
//! # Modules
//!
//! - [`docs_rs`]: Build status client for docs.rs
//! - [`probe`]: Fire-and-forget probe that produces documentation updates

pub mod docs_rs;
pub mod probe;

pub use docs_rs::{BuildStatus, BuildStatusSource, DocsRsClient};
pub use probe::{DocumentationProbe, ProbeState};
