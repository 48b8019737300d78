pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod ui;

pub use api::{parse_flat, Endpoint, FlatMap, RbxStatsClient};
pub use error::{RbxStatsError, Result};
