//! Version layer for crate version resolution
//!
//! This module loads a crate's version catalog from the registry and decides
//! which single version should be treated as "current" for a request.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Registry   │────▶│   Catalog   │◀────│  Resolver   │
//! │  (fetch)    │     │ (versions)  │     │ (fallbacks) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │                   │
//!        ▼                   ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Registries  │     │   Release   │     │   Semver    │
//! │ (crates.io) │     │   tracks    │     │ (classify)  │
//! └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`catalog`]: Version catalog contract and version ordering
//! - [`error`]: Error types for registry and probe operations
//! - [`registry`]: Registry trait for fetching a crate summary
//! - [`registries`]: Concrete registry implementations (crates.io)
//! - [`release_tracks`]: Highest stable version per release track
//! - [`resolver`]: Effective version resolution with fallbacks
//! - [`semver`]: Strict semver parsing and pre-release classification
//! - [`types`]: Version records and crate summaries

pub mod catalog;
pub mod error;
pub mod registries;
pub mod registry;
pub mod release_tracks;
pub mod resolver;
pub mod semver;
pub mod types;
