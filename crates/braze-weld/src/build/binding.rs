//! BindingBuilder: drives one generation run end to end
//!
//! Resolves paths, checks the prebuilt artifact, invokes the parser
//! collaborator, and renders both artifacts fully in memory before
//! anything is written. A run either writes the `.pyx` and `setup.py`
//! together or writes nothing.

use crate::build::parser::{DumpCommand, HeaderParser};
use crate::codegen::{DistutilsGenerator, PyxGenerator};
use crate::error::{WeldError, WeldResult};
use crate::ir::{ClassSymbol, QualifiedName};
use crate::paths::BindingPaths;
use crate::plan::{BindingPlan, TargetCapabilities};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Builder for one class binding
pub struct BindingBuilder {
    name: QualifiedName,
    paths: BindingPaths,
    parser: Box<dyn HeaderParser>,
    capabilities: TargetCapabilities,
}

impl BindingBuilder {
    /// Create a builder for `name` under `install_root`
    pub fn new(install_root: impl Into<PathBuf>, name: QualifiedName) -> Self {
        let paths = BindingPaths::derive(install_root, &name);
        Self {
            name,
            paths,
            parser: Box::new(DumpCommand::default()),
            capabilities: TargetCapabilities::default(),
        }
    }

    /// Replace the header parser collaborator
    pub fn parser(mut self, parser: impl HeaderParser + 'static) -> Self {
        self.parser = Box::new(parser);
        self
    }

    /// Set the emission target's capabilities
    pub fn capabilities(mut self, capabilities: TargetCapabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Resolved layout for this run
    pub fn paths(&self) -> &BindingPaths {
        &self.paths
    }

    /// Render both artifacts in memory without touching the filesystem
    pub fn generate(&self) -> WeldResult<GeneratedBinding> {
        // The compiled artifact must exist before any parsing or
        // emission work happens.
        if !self.paths.library.exists() {
            return Err(WeldError::MissingArtifact(self.paths.library.clone()));
        }

        debug!(
            class = %self.name.scoped(),
            header = %self.paths.header.display(),
            "parsing header"
        );
        let tree = self.parser.parse(&self.paths.header)?;
        let symbol = ClassSymbol::from_raw(&tree, &self.name, &self.paths.header)?;
        let plan = BindingPlan::new(&symbol, self.capabilities)?;
        debug!(
            class = %self.name.scoped(),
            constructors = plan.constructors.len(),
            methods = plan.methods.len(),
            "derived binding plan"
        );

        let pyx = PyxGenerator::new(&plan, &self.paths).generate();
        let setup_py = DistutilsGenerator::new(&self.paths).setup_py();

        Ok(GeneratedBinding { pyx, setup_py })
    }

    /// Generate and write both artifacts
    ///
    /// The output directory is created only after generation succeeds,
    /// so a failed run leaves no partial output behind.
    pub fn build(&self) -> WeldResult<WrittenBinding> {
        let generated = self.generate()?;

        fs::create_dir_all(&self.paths.output_dir)?;
        fs::write(&self.paths.pyx_file, &generated.pyx)?;
        fs::write(&self.paths.setup_file, &generated.setup_py)?;

        info!(
            class = %self.name.scoped(),
            pyx = %self.paths.pyx_file.display(),
            setup = %self.paths.setup_file.display(),
            "wrote binding artifacts"
        );

        Ok(WrittenBinding {
            pyx_file: self.paths.pyx_file.clone(),
            setup_file: self.paths.setup_file.clone(),
        })
    }
}

/// Both artifacts rendered in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedBinding {
    /// Complete `.pyx` source (prelude + mirror + wrapper)
    pub pyx: String,
    /// Complete `setup.py` source
    pub setup_py: String,
}

/// Paths written by a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenBinding {
    /// Written Cython source
    pub pyx_file: PathBuf,
    /// Written build descriptor
    pub setup_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::raw::{RawClass, RawHeader, RawMethod, RawParam};
    use std::path::Path;

    /// Stub collaborator returning a fixed tree
    struct FixedTree(RawHeader);

    impl HeaderParser for FixedTree {
        fn parse(&self, _header: &Path) -> WeldResult<RawHeader> {
            Ok(self.0.clone())
        }
    }

    fn rectangle_tree() -> RawHeader {
        let ctor = RawMethod {
            name: "rectangle".into(),
            rtn_type: "void".into(),
            constructor: true,
            destructor: false,
            parameters: vec![RawParam {
                ty: "int".into(),
                name: "x0".into(),
                default_value: Some("0".into()),
            }],
        };
        let area = RawMethod {
            name: "getArea".into(),
            rtn_type: "int".into(),
            ..RawMethod::default()
        };
        let dtor = RawMethod {
            name: "~rectangle".into(),
            destructor: true,
            ..RawMethod::default()
        };

        let mut class = RawClass::default();
        class.methods.public = vec![ctor, area, dtor];
        let mut tree = RawHeader::default();
        tree.classes.insert("rectangle".into(), class);
        tree
    }

    fn builder_with_library(root: &Path, tree: RawHeader) -> BindingBuilder {
        let name = QualifiedName::parse("Gold::rectangle").unwrap();
        let builder = BindingBuilder::new(root, name).parser(FixedTree(tree));
        fs::create_dir_all(&builder.paths().library_dir).unwrap();
        fs::write(&builder.paths().library, b"").unwrap();
        builder
    }

    #[test]
    fn test_build_writes_both_artifacts() {
        let root = tempfile::tempdir().unwrap();
        let builder = builder_with_library(root.path(), rectangle_tree());

        let written = builder.build().unwrap();
        let pyx = fs::read_to_string(&written.pyx_file).unwrap();
        let setup = fs::read_to_string(&written.setup_file).unwrap();

        assert!(pyx.contains("cdef cppclass rectangle:"));
        assert!(pyx.contains("cdef class Rectangle:"));
        assert!(setup.contains("cythonize"));
    }

    #[test]
    fn test_missing_artifact_aborts_before_parsing() {
        let root = tempfile::tempdir().unwrap();
        let name = QualifiedName::parse("Gold::rectangle").unwrap();

        /// Collaborator that must never be reached
        struct Unreachable;
        impl HeaderParser for Unreachable {
            fn parse(&self, _header: &Path) -> WeldResult<RawHeader> {
                panic!("parser invoked although the artifact check failed");
            }
        }

        let builder = BindingBuilder::new(root.path(), name).parser(Unreachable);
        let err = builder.build().unwrap_err();

        assert!(matches!(err, WeldError::MissingArtifact(_)));
        // Nothing may exist on disk after the failed run.
        assert!(!builder.paths().output_dir.exists());
    }

    #[test]
    fn test_malformed_tree_leaves_no_output() {
        let root = tempfile::tempdir().unwrap();
        let mut tree = rectangle_tree();
        tree.classes
            .get_mut("rectangle")
            .unwrap()
            .methods
            .public
            .push(RawMethod {
                rtn_type: "int".into(),
                ..RawMethod::default()
            });

        let builder = builder_with_library(root.path(), tree);
        let err = builder.build().unwrap_err();

        assert!(matches!(err, WeldError::MalformedSignature { .. }));
        assert!(!builder.paths().output_dir.exists());
        assert!(!builder.paths().pyx_file.exists());
    }

    #[test]
    fn test_class_not_found_leaves_no_output() {
        let root = tempfile::tempdir().unwrap();
        let builder = builder_with_library(root.path(), RawHeader::default());

        let err = builder.build().unwrap_err();
        assert!(matches!(err, WeldError::ClassNotFound { .. }));
        assert!(!builder.paths().output_dir.exists());
    }

    #[test]
    fn test_overload_conflict_leaves_no_output() {
        let root = tempfile::tempdir().unwrap();
        let mut tree = rectangle_tree();
        tree.classes
            .get_mut("rectangle")
            .unwrap()
            .methods
            .public
            .push(RawMethod {
                name: "rectangle".into(),
                rtn_type: "void".into(),
                constructor: true,
                ..RawMethod::default()
            });

        let builder = builder_with_library(root.path(), tree.clone());
        let err = builder.build().unwrap_err();
        assert!(matches!(err, WeldError::PlanConflict(_)));
        assert!(!builder.paths().output_dir.exists());

        // The same tree plans cleanly for a target with overloads.
        let root = tempfile::tempdir().unwrap();
        let builder = builder_with_library(root.path(), tree)
            .capabilities(TargetCapabilities::with_overloads());
        let generated = builder.generate().unwrap();
        assert_eq!(generated.pyx.matches("__cinit__").count(), 2);
    }
}
