//! Symbol metadata for native class interfaces
//!
//! This module provides the typed model of one C++ class's public
//! surface, built once per generation run from the raw parsed tree and
//! consumed read-only by the planner and the code generators.

use crate::error::{WeldError, WeldResult};
use crate::ir::raw::{RawHeader, RawMethod};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single declared parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CxxParam {
    /// Declared C++ type, carried verbatim
    pub ty: String,
    /// Parameter name
    pub name: String,
    /// Default-value literal, if declared
    pub default: Option<String>,
}

impl CxxParam {
    /// Create a new parameter
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
            default: None,
        }
    }

    /// Set the default-value literal
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// `type name`, the declaration form with defaults stripped
    pub fn to_decl(&self) -> String {
        format!("{} {}", self.ty, self.name)
    }

    /// `type name = default` when a default is declared, else `type name`
    pub fn to_decl_with_default(&self) -> String {
        match &self.default {
            Some(default) => format!("{} {} = {}", self.ty, self.name, default),
            None => self.to_decl(),
        }
    }
}

/// Role of a class member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberRole {
    /// Constructor (a class may declare several overloads)
    Constructor,
    /// Destructor (at most one per class)
    Destructor,
    /// Ordinary callable member
    Regular,
}

/// One public member of a native class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSymbol {
    /// Declared name
    pub name: String,
    /// Parameters in declaration order; this order is the cross-artifact
    /// consistency contract and is never reordered downstream
    pub params: Vec<CxxParam>,
    /// Declared return type, verbatim (empty for destructors)
    pub return_type: String,
    /// Member role
    pub role: MemberRole,
}

impl MethodSymbol {
    /// Create a new member symbol
    pub fn new(name: impl Into<String>, role: MemberRole) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            return_type: String::new(),
            role,
        }
    }

    /// Add a parameter
    pub fn param(mut self, param: CxxParam) -> Self {
        self.params.push(param);
        self
    }

    /// Set the return type
    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = ty.into();
        self
    }

    /// Whether the declared return type denotes "no value"
    pub fn returns_void(&self) -> bool {
        self.return_type == "void"
    }

    /// Parameter names in declaration order
    pub fn param_names(&self) -> Vec<&str> {
        self.params.iter().map(|p| p.name.as_str()).collect()
    }

    fn from_raw(class: &str, raw: &RawMethod) -> WeldResult<Self> {
        if raw.name.is_empty() {
            return Err(WeldError::malformed(class, "method entry has no name"));
        }

        let role = if raw.destructor {
            MemberRole::Destructor
        } else if raw.constructor {
            MemberRole::Constructor
        } else {
            MemberRole::Regular
        };

        // Destructor entries are the only ones exempt from carrying a
        // resolvable return type.
        if raw.rtn_type.is_empty() && role != MemberRole::Destructor {
            return Err(WeldError::malformed(
                class,
                format!("method {} has no return type", raw.name),
            ));
        }

        let mut params = Vec::with_capacity(raw.parameters.len());
        for p in &raw.parameters {
            if p.name.is_empty() {
                return Err(WeldError::malformed(
                    class,
                    format!("method {} has an unnamed parameter", raw.name),
                ));
            }
            params.push(CxxParam {
                ty: p.ty.clone(),
                name: p.name.clone(),
                default: p.default_value.clone(),
            });
        }

        Ok(Self {
            name: raw.name.clone(),
            params,
            return_type: raw.rtn_type.clone(),
            role,
        })
    }
}

/// The extracted public surface of one native class
///
/// Created once per generation run; immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSymbol {
    /// Class name as declared
    pub name: String,
    /// Enclosing namespace path, outermost first
    pub namespace: Vec<String>,
    /// Header file the declaration was read from
    pub header: PathBuf,
    /// Public members in declaration order
    pub members: Vec<MethodSymbol>,
}

impl ClassSymbol {
    /// Build the interface model for `name` from a raw parsed tree
    ///
    /// Fails with [`WeldError::ClassNotFound`] when the class is absent
    /// and [`WeldError::MalformedSignature`] when a member cannot be
    /// classified. Pure transformation; performs no I/O.
    pub fn from_raw(tree: &RawHeader, name: &QualifiedName, header: &Path) -> WeldResult<Self> {
        let class = tree
            .class(&name.class)
            .ok_or_else(|| WeldError::class_not_found(&name.class))?;

        let mut members = Vec::with_capacity(class.methods.public.len());
        for raw in &class.methods.public {
            members.push(MethodSymbol::from_raw(&name.class, raw)?);
        }

        Ok(Self {
            name: name.class.clone(),
            namespace: name.namespace.clone(),
            header: header.to_path_buf(),
            members,
        })
    }

    /// Namespace path joined with the C++ scope separator
    pub fn scoped_namespace(&self) -> String {
        self.namespace.join("::")
    }

    /// Name of the Python wrapper type derived from the class name
    pub fn wrapper_name(&self) -> String {
        title_case(&self.name)
    }
}

/// A fully-qualified native class identifier, e.g. `Outer::Inner::Widget`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedName {
    /// Namespace segments, outermost first
    pub namespace: Vec<String>,
    /// Trailing class name
    pub class: String,
}

impl QualifiedName {
    /// Split a `Ns::Ns::Class` identifier into namespace path and class
    pub fn parse(full: &str) -> WeldResult<Self> {
        let mut segments: Vec<String> = full.split("::").map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty() || s.contains(char::is_whitespace)) {
            return Err(WeldError::InvalidIdentifier(full.to_string()));
        }
        let class = segments.pop().unwrap_or_default();
        Ok(Self {
            namespace: segments,
            class,
        })
    }

    /// The identifier joined back with the scope separator
    pub fn scoped(&self) -> String {
        let mut parts = self.namespace.clone();
        parts.push(self.class.clone());
        parts.join("::")
    }
}

/// Title-case an identifier with Python `str.title()` semantics:
/// the first letter of each alphabetic run is uppercased, the rest
/// lowercased. `rectangle` becomes `Rectangle`, `my_class` `My_Class`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut boundary = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if boundary {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            boundary = false;
        } else {
            out.push(c);
            boundary = true;
        }
    }
    out
}
