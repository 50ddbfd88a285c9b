//! Path data parsing.
//!
//! The parser turns the SVG path mini-language into [`PathItem`]s. It is
//! permissive in the same way renderers are: malformed input is not an
//! error, it just ends the path.
//!
//! # Usage
//!
//! ```
//! use pathmin::parser::parse_path_data;
//!
//! let items = parse_path_data("M0,0 10,20z");
//! assert_eq!(items.len(), 3);
//! assert_eq!(items[1].command.as_char(), 'L');
//! ```
//!
//! [`PathItem`]: crate::types::PathItem

pub mod number;
pub mod path;
pub mod span;

pub use path::{parse_path_data, parse_path_data_with_outcome, ParseOutcome, Stop, StopReason};
pub use span::{Location, Span, Spanned};
