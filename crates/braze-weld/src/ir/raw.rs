//! Raw parsed header tree
//!
//! Wire shape of the JSON a header-dump tool emits for one C++ header.
//! The parser itself is an external collaborator; this module only
//! mirrors its output so the rest of the pipeline can consume a typed
//! tree instead of untyped dictionaries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One parsed header file: class name to class tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawHeader {
    /// All classes declared in the header
    #[serde(default)]
    pub classes: BTreeMap<String, RawClass>,
}

impl RawHeader {
    /// Decode a dumped tree from its JSON text
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    /// Look up a class by name
    pub fn class(&self, name: &str) -> Option<&RawClass> {
        self.classes.get(name)
    }
}

/// One class declaration as parsed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawClass {
    /// Methods grouped by access specifier
    #[serde(default)]
    pub methods: RawMethodAccess,
}

/// Methods of a class, grouped the way the dump groups them
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMethodAccess {
    /// Public members; the only group the binding surface is built from
    #[serde(default)]
    pub public: Vec<RawMethod>,

    /// Protected members, present in the dump but never bound
    #[serde(default)]
    pub protected: Vec<RawMethod>,

    /// Private members, present in the dump but never bound
    #[serde(default)]
    pub private: Vec<RawMethod>,
}

/// One method entry as parsed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMethod {
    /// Declared method name
    #[serde(default)]
    pub name: String,

    /// Declared return type, verbatim
    #[serde(rename = "rtnType", default)]
    pub rtn_type: String,

    /// Whether the parser flagged this entry as a constructor
    #[serde(default)]
    pub constructor: bool,

    /// Whether the parser flagged this entry as a destructor
    #[serde(default)]
    pub destructor: bool,

    /// Declared parameters, in declaration order
    #[serde(default)]
    pub parameters: Vec<RawParam>,
}

/// One declared parameter as parsed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawParam {
    /// Declared type, verbatim
    #[serde(rename = "type")]
    pub ty: String,

    /// Parameter name
    pub name: String,

    /// Default-value literal when declared; `None` when the parameter
    /// has no default (distinct from an empty-string literal)
    #[serde(rename = "defaultValue", default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decode_wire_names() {
        let tree = RawHeader::from_json(
            r#"{
                "classes": {
                    "rectangle": {
                        "methods": {
                            "public": [
                                {
                                    "name": "rectangle",
                                    "rtnType": "void",
                                    "constructor": true,
                                    "destructor": false,
                                    "parameters": [
                                        {"type": "int", "name": "x0", "defaultValue": "0"}
                                    ]
                                },
                                {
                                    "name": "getArea",
                                    "rtnType": "int",
                                    "constructor": false,
                                    "destructor": false,
                                    "parameters": []
                                }
                            ]
                        }
                    }
                }
            }"#,
        )
        .unwrap();

        let class = tree.class("rectangle").unwrap();
        assert_eq!(class.methods.public.len(), 2);

        let ctor = &class.methods.public[0];
        assert!(ctor.constructor);
        assert_eq!(ctor.rtn_type, "void");
        assert_eq!(ctor.parameters[0].default_value.as_deref(), Some("0"));
        assert_eq!(class.methods.public[1].rtn_type, "int");
    }

    #[test]
    fn test_absent_default_is_none() {
        let tree = RawHeader::from_json(
            r#"{
                "classes": {
                    "foo": {
                        "methods": {
                            "public": [
                                {
                                    "name": "bar",
                                    "rtnType": "void",
                                    "parameters": [
                                        {"type": "int", "name": "a"},
                                        {"type": "int", "name": "b", "defaultValue": ""}
                                    ]
                                }
                            ]
                        }
                    }
                }
            }"#,
        )
        .unwrap();

        let params = &tree.class("foo").unwrap().methods.public[0].parameters;
        assert_eq!(params[0].default_value, None);
        assert_eq!(params[1].default_value.as_deref(), Some(""));
    }

    #[test]
    fn test_missing_class() {
        let tree = RawHeader::from_json(r#"{"classes": {}}"#).unwrap();
        assert!(tree.class("absent").is_none());
    }
}
