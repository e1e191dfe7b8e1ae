//! Registry implementations for fetching crate summaries

pub mod crates_io;

pub use crates_io::CratesIoRegistry;
