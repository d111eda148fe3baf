//! HTML parsers for iwaatch.com
//!
//! Contains modules for parsing different page types. Parsers never fail:
//! markup that does not match yields empty or placeholder values.

pub mod details;
pub mod search;
pub mod stream;

pub use details::parse_details;
pub use search::parse_search_results;
pub use stream::parse_stream_bundle;
