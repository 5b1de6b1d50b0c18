//! Complete `.pyx` source assembly
//!
//! Assembles the distutils prelude, the declaration mirror, and the
//! owning wrapper into one Cython source file. Mirror and wrapper read
//! the same plan, so the two blocks stay structurally consistent by
//! construction.

use crate::codegen::{DeclarationGenerator, DistutilsGenerator, WrapperGenerator};
use crate::paths::BindingPaths;
use crate::plan::BindingPlan;

/// Generator for the complete emitted Cython source
pub struct PyxGenerator<'a> {
    plan: &'a BindingPlan,
    paths: &'a BindingPaths,
}

impl<'a> PyxGenerator<'a> {
    /// Create a new generator for a plan
    pub fn new(plan: &'a BindingPlan, paths: &'a BindingPaths) -> Self {
        Self { plan, paths }
    }

    /// Generate the complete `.pyx` source
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str(&DistutilsGenerator::new(self.paths).prelude());
        output.push('\n');
        output.push_str(&DeclarationGenerator::new(self.plan).generate());
        output.push('\n');
        output.push_str(&WrapperGenerator::new(self.plan).generate());

        output
    }
}
