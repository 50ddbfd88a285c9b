//! Core domain types for pathmin.
//!
//! This module contains the values exchanged between the parser, the
//! serializer and any rewrite logic in between:
//! - `Command` - The twenty path command letters and their arities
//! - `PathItem` - A command with its numeric arguments
//! - `PathData` - An ordered sequence of items

mod command;
mod item;

pub use command::Command;
pub use item::{PathData, PathItem};
