pub mod client;
pub mod config;
pub mod docs;
pub mod endpoint;
pub mod version;
