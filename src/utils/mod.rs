//! Helpers shared by the request decoders and the query builder.
//!
//! - [`multi_value`] - Splitting of separator-delimited filter strings
//! - [`parse`] - Lenient or strict parsing of numeric and boolean input

pub mod multi_value;
pub mod parse;
