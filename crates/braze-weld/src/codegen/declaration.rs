//! Cython declaration mirror generator
//!
//! Renders the `cdef extern` block that tells Cython how the native
//! class's symbols are laid out. Defaults never appear here; the
//! wrapper keeps them (see `wrapper.rs`).

use crate::plan::{BindingPlan, PlannedMember};
use std::fmt;

/// Generator for the foreign declaration mirror
pub struct DeclarationGenerator<'a> {
    plan: &'a BindingPlan,
}

impl<'a> DeclarationGenerator<'a> {
    /// Create a new declaration generator for a plan
    pub fn new(plan: &'a BindingPlan) -> Self {
        Self { plan }
    }

    /// Generate the complete extern block
    pub fn generate(&self) -> String {
        let mut output = String::new();

        let header = self.plan.header.display();
        if self.plan.namespace.is_empty() {
            output.push_str(&format!("cdef extern from \"{}\":\n", header));
        } else {
            output.push_str(&format!(
                "cdef extern from \"{}\" namespace \"{}\":\n",
                header,
                self.plan.scoped_namespace()
            ));
        }
        output.push_str(&format!("    cdef cppclass {}:\n", self.plan.class));

        for member in self.plan.callable_members() {
            output.push_str("        ");
            output.push_str(&self.member_line(member));
            output.push('\n');
        }

        output
    }

    /// Write the extern block into a caller-supplied sink
    pub fn write_into(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(&self.generate())
    }

    /// One mirror line:
    /// `<return-type-or-empty> <name>(<type name, ...>)<marker-or-empty>`
    fn member_line(&self, member: &PlannedMember) -> String {
        let params: Vec<String> = member.symbol.params.iter().map(|p| p.to_decl()).collect();
        let return_type = if member.elide_return {
            String::new()
        } else {
            format!("{} ", member.symbol.return_type)
        };
        let marker = if member.throws { " except +" } else { "" };

        format!(
            "{}{}({}){}",
            return_type,
            member.symbol.name,
            params.join(", "),
            marker
        )
    }
}
