//! Build plumbing around the generation core
//!
//! This module provides the pieces that touch the outside world:
//! - the external header-parser collaborator boundary (parser.rs)
//! - the BindingBuilder pipeline driver (binding.rs)

pub mod binding;
pub mod parser;

pub use binding::{BindingBuilder, GeneratedBinding, WrittenBinding};
pub use parser::{DumpCommand, HeaderParser, JsonFile};
