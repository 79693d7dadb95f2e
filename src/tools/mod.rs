//! Tools the hosted model may call during an agent turn.

pub mod web_search;

pub use web_search::WebSearch;
