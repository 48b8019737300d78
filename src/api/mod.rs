pub mod client;
pub mod endpoints;
pub mod parse;

pub use client::{RbxStatsClient, DEFAULT_BASE_URL};
pub use endpoints::Endpoint;
pub use parse::{parse_flat, FlatMap};
