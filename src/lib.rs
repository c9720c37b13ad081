pub mod analyzer;
pub mod cli;
pub mod filter;
pub mod server;
pub mod service;
pub mod store;

pub use analyzer::{CharFrequency, Properties, analyze, fingerprint};
pub use cli::{Cli, Commands, cli_parse};
pub use filter::{FilterSet, apply_filters, translate};
pub use service::{ApiError, InterpretedQuery, ListResponse, RawFilterParams, SearchResponse};
pub use store::{StringRecord, StringStore};
