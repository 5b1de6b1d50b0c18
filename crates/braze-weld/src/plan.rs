//! Binding plan derivation
//!
//! Classifies each member of a class interface and attaches its emission
//! policy. Both code generators consume the same plan, so the foreign
//! declaration mirror and the owning wrapper cannot disagree on member
//! names, parameter order, or arity.

use crate::error::{WeldError, WeldResult};
use crate::ir::{ClassSymbol, MemberRole, MethodSymbol};
use std::path::PathBuf;

/// What the emission target is able to express
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetCapabilities {
    /// Whether the wrapper type may declare more than one initializer.
    /// Cython's `__cinit__` cannot be overloaded, so the default is off.
    pub supports_overloads: bool,
}

impl Default for TargetCapabilities {
    fn default() -> Self {
        Self {
            supports_overloads: false,
        }
    }
}

impl TargetCapabilities {
    /// Capabilities of a target with real initializer overload resolution
    pub fn with_overloads() -> Self {
        Self {
            supports_overloads: true,
        }
    }
}

/// One member with its emission policy attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMember {
    /// The underlying member symbol
    pub symbol: MethodSymbol,
    /// Mirror line carries the `except +` exception marker
    pub throws: bool,
    /// Mirror line omits the declared return type
    pub elide_return: bool,
}

/// Emission-ready view over one class interface
///
/// Lifetime is a single generation run; the plan is derived once and
/// read by every generator.
#[derive(Debug, Clone)]
pub struct BindingPlan {
    /// Native class name
    pub class: String,
    /// Enclosing namespace path, outermost first
    pub namespace: Vec<String>,
    /// Header file the declaration mirror names
    pub header: PathBuf,
    /// Python wrapper type name (title-cased class name)
    pub wrapper_name: String,
    /// Planned constructor overloads
    pub constructors: Vec<PlannedMember>,
    /// Planned regular members
    pub methods: Vec<PlannedMember>,
}

impl BindingPlan {
    /// Derive the plan for a class interface
    ///
    /// Destructors are dropped here: destruction is handled by the
    /// wrapper's single finalizer, never exposed as a callable. Fails
    /// with [`WeldError::PlanConflict`] when the class declares several
    /// constructors and the target cannot disambiguate initializers.
    pub fn new(symbol: &ClassSymbol, caps: TargetCapabilities) -> WeldResult<Self> {
        let mut constructors = Vec::new();
        let mut methods = Vec::new();

        for member in &symbol.members {
            match member.role {
                MemberRole::Destructor => continue,
                MemberRole::Constructor => constructors.push(PlannedMember {
                    symbol: member.clone(),
                    throws: true,
                    elide_return: true,
                }),
                MemberRole::Regular => methods.push(PlannedMember {
                    symbol: member.clone(),
                    throws: false,
                    elide_return: false,
                }),
            }
        }

        if constructors.len() > 1 && !caps.supports_overloads {
            let arities: Vec<usize> = constructors.iter().map(|c| c.symbol.params.len()).collect();
            return Err(WeldError::PlanConflict(format!(
                "{} declares {} constructor overloads (arities {:?}) but the target cannot disambiguate initializers",
                symbol.name,
                constructors.len(),
                arities
            )));
        }

        Ok(Self {
            class: symbol.name.clone(),
            namespace: symbol.namespace.clone(),
            header: symbol.header.clone(),
            wrapper_name: symbol.wrapper_name(),
            constructors,
            methods,
        })
    }

    /// Members of the callable surface, constructors first
    pub fn callable_members(&self) -> impl Iterator<Item = &PlannedMember> {
        self.constructors.iter().chain(self.methods.iter())
    }

    /// Size of the callable surface (constructors + regular members)
    pub fn arity(&self) -> usize {
        self.constructors.len() + self.methods.len()
    }

    /// Namespace path joined with the C++ scope separator
    pub fn scoped_namespace(&self) -> String {
        self.namespace.join("::")
    }
}
