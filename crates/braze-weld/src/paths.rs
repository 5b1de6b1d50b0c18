//! Derived filesystem layout for a binding run
//!
//! All paths the pipeline touches are computed here, once, from the
//! install root and the qualified class name. The rest of the pipeline
//! receives this struct explicitly instead of consulting the process
//! environment.

use crate::ir::{title_case, QualifiedName};
use std::path::PathBuf;

/// Resolved locations for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingPaths {
    /// Base installation root every other path derives from
    pub install_root: PathBuf,
    /// Header file declaring the class:
    /// `<root>/cplusplus/<ns…>/<class>/<class>.hpp`
    pub header: PathBuf,
    /// Prebuilt shared library to link against: `<root>/lib/lib<stem>.so`
    pub library: PathBuf,
    /// Additional library search directory: `<root>/lib`
    pub library_dir: PathBuf,
    /// Link name of the compiled artifact (the `<stem>` in `lib<stem>.so`)
    pub library_stem: String,
    /// Output directory for the emitted artifacts: `<header dir>/python`
    pub output_dir: PathBuf,
    /// Emitted Cython source: `<output dir>/<Title>.pyx`
    pub pyx_file: PathBuf,
    /// Emitted build descriptor: `<output dir>/setup.py`
    pub setup_file: PathBuf,
    /// Loadable module the descriptor's build step produces
    pub module_so: PathBuf,
    /// Python package directory the module is relocated into after build
    pub package_dir: PathBuf,
}

impl BindingPaths {
    /// Derive every path for `name` under `install_root`
    pub fn derive(install_root: impl Into<PathBuf>, name: &QualifiedName) -> Self {
        let install_root = install_root.into();

        let mut header_dir = install_root.join("cplusplus");
        for segment in &name.namespace {
            header_dir.push(segment);
        }
        header_dir.push(&name.class);
        let header = header_dir.join(format!("{}.hpp", name.class));

        // A class in a one-segment namespace links against its own
        // library; deeper namespaces link against the subsystem library
        // named by the second segment.
        let library_stem = if name.namespace.len() <= 1 {
            name.class.clone()
        } else {
            name.namespace[1].clone()
        };
        let library_dir = install_root.join("lib");
        let library = library_dir.join(format!("lib{}.so", library_stem));

        let wrapper = title_case(&name.class);
        let output_dir = header_dir.join("python");
        let pyx_file = output_dir.join(format!("{}.pyx", wrapper));
        let setup_file = output_dir.join("setup.py");
        let module_so = output_dir.join(format!("{}.so", wrapper));

        let package = name
            .namespace
            .first()
            .cloned()
            .unwrap_or_else(|| name.class.clone());
        let package_dir = install_root.join("python").join(package);

        Self {
            install_root,
            header,
            library,
            library_dir,
            library_stem,
            output_dir,
            pyx_file,
            setup_file,
            module_so,
            package_dir,
        }
    }

    /// Library search directory as it should appear in the descriptor
    pub fn library_dir_display(&self) -> String {
        self.library_dir.display().to_string()
    }
}
