//! Code generation for Cython bindings
//!
//! This module provides the generators for:
//! - the `cdef extern` declaration mirror (declaration.rs)
//! - the owning `cdef class` wrapper (wrapper.rs)
//! - the distutils prelude and setup.py build descriptor (distutils.rs)
//! - the assembled `.pyx` source (pyx.rs)
//!
//! The mirror and wrapper generators read the same
//! [`crate::plan::BindingPlan`]; none of the generators performs file
//! I/O.

pub mod declaration;
pub mod distutils;
pub mod pyx;
pub mod wrapper;

pub use declaration::DeclarationGenerator;
pub use distutils::DistutilsGenerator;
pub use pyx::PyxGenerator;
pub use wrapper::WrapperGenerator;
