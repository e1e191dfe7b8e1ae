//! Shared test utilities

#![allow(dead_code)]

pub mod registry;

#[allow(unused_imports)]
pub use registry::{MockRegistry, package};
