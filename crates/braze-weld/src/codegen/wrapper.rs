//! Owning wrapper type generator
//!
//! Renders the `cdef class` that holds the exclusively-owned pointer to
//! a native instance and forwards calls to it. Defaults stay on the
//! Python-facing signatures; the forwarded native call is always a full
//! positional argument list (Python resolves omitted arguments before
//! the call reaches it).

use crate::plan::{BindingPlan, PlannedMember};
use std::fmt;

/// Generator for the owning `cdef class` wrapper
pub struct WrapperGenerator<'a> {
    plan: &'a BindingPlan,
}

impl<'a> WrapperGenerator<'a> {
    /// Create a new wrapper generator for a plan
    pub fn new(plan: &'a BindingPlan) -> Self {
        Self { plan }
    }

    /// Generate the complete wrapper type
    pub fn generate(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("cdef class {}:\n", self.plan.wrapper_name));
        output.push_str(&format!("    cdef {}* ptr\n", self.plan.class));

        for ctor in &self.plan.constructors {
            output.push_str(&format!("    def __cinit__({}):\n", self.def_params(ctor)));
            output.push_str(&format!(
                "        self.ptr = new {}({})\n",
                self.plan.class,
                self.arg_list(ctor)
            ));
        }

        for method in &self.plan.methods {
            output.push_str(&format!(
                "    def {}({}):\n",
                method.symbol.name,
                self.def_params(method)
            ));
            // A void native call produces no Python value to return.
            let keyword = if method.symbol.returns_void() {
                ""
            } else {
                "return "
            };
            output.push_str(&format!(
                "        {}self.ptr.{}({})\n",
                keyword,
                method.symbol.name,
                self.arg_list(method)
            ));
        }

        output.push_str("    def __dealloc__(self):\n");
        output.push_str("        del self.ptr\n");

        output
    }

    /// Write the wrapper type into a caller-supplied sink
    pub fn write_into(&self, out: &mut dyn fmt::Write) -> fmt::Result {
        out.write_str(&self.generate())
    }

    /// Python-facing parameter list: `self` plus typed params with
    /// their declared defaults
    fn def_params(&self, member: &PlannedMember) -> String {
        let mut parts = vec!["self".to_string()];
        parts.extend(
            member
                .symbol
                .params
                .iter()
                .map(|p| p.to_decl_with_default()),
        );
        parts.join(", ")
    }

    /// Positional argument list for the forwarded native call
    fn arg_list(&self, member: &PlannedMember) -> String {
        member.symbol.param_names().join(", ")
    }
}
