//! Rendering module for pathmin.
//!
//! This module turns parsed path data back into minimal text: numeric
//! rounding and compaction live in `number`, command merging and separator
//! placement in `path`.

pub mod number;
mod path;

pub use number::{format_number, round_and_format, round_to};
pub use path::{merge_runs, stringify_args, stringify_path_data, StringifyOptions};
