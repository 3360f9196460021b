//! File parsers for message files.
//!
//! - `json`: locale JSON parser (flattens nested documents into dotted keys)

pub mod json;
