//! Chain Source Adapters

mod http;

pub use http::HttpChainSource;
