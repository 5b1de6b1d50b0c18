//! Braze-Weld: C++ to Python binding generation
//!
//! Given the fully-qualified name of a C++ class, braze-weld extracts
//! the class's public interface from a parsed header tree and emits a
//! Cython source file containing two synchronized blocks — the
//! `cdef extern` declaration mirror and the owning `cdef class` wrapper
//! — plus the distutils `setup.py` that builds and installs the module.
//!
//! # Architecture
//!
//! - `ir`: raw parsed tree and the typed class interface model
//! - `plan`: per-member emission policy shared by every generator
//! - `codegen`: declaration mirror, owning wrapper, build descriptor
//! - `paths`: explicit filesystem layout derived from the install root
//! - `build`: parser collaborator boundary and the pipeline driver
//!
//! # Usage
//!
//! ```rust,ignore
//! use braze_weld::{BindingBuilder, QualifiedName};
//!
//! let name = QualifiedName::parse("Gold::rectangle")?;
//! BindingBuilder::new("/opt/gold", name).build()?;
//! ```

pub mod build;
pub mod codegen;
pub mod error;
pub mod ir;
pub mod paths;
pub mod plan;

// Re-export commonly used types
pub use build::{BindingBuilder, DumpCommand, GeneratedBinding, HeaderParser, JsonFile, WrittenBinding};
pub use codegen::{DeclarationGenerator, DistutilsGenerator, PyxGenerator, WrapperGenerator};
pub use error::{WeldError, WeldResult};
pub use ir::{
    ClassSymbol, CxxParam, MemberRole, MethodSymbol, QualifiedName, RawClass, RawHeader, RawMethod,
    RawParam,
};
pub use paths::BindingPaths;
pub use plan::{BindingPlan, PlannedMember, TargetCapabilities};
