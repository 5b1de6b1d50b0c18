//! Build descriptor generation
//!
//! Renders the distutils prelude that ties the emitted `.pyx` to the
//! prebuilt native artifact, and the `setup.py` that cythonizes the
//! source and relocates the loadable module into the Python package.
//! Templated substitution only; no business logic.

use crate::paths::BindingPaths;

/// Container types the declaration mirror may reference without any
/// manual cimports
const FOREIGN_CONTAINERS: &[&str] = &["string", "vector", "map"];

/// Generator for the external build description
///
/// Consumes only the class identity already baked into the derived
/// paths; the member list never matters here.
pub struct DistutilsGenerator<'a> {
    paths: &'a BindingPaths,
}

impl<'a> DistutilsGenerator<'a> {
    /// Create a new build descriptor generator
    pub fn new(paths: &'a BindingPaths) -> Self {
        Self { paths }
    }

    /// `.pyx` prelude: distutils directives plus the libcpp cimports
    pub fn prelude(&self) -> String {
        let mut output = String::new();

        output.push_str("# distutils: language = c++\n");
        output.push_str(&format!(
            "# distutils: libraries = {}\n",
            self.paths.library_stem
        ));
        output.push_str(&format!(
            "# distutils: library_dirs = {}\n",
            self.paths.library_dir_display()
        ));
        output.push('\n');

        for container in FOREIGN_CONTAINERS {
            output.push_str(&format!(
                "from libcpp.{} cimport {}\n",
                container, container
            ));
        }

        output
    }

    /// Complete `setup.py` source
    ///
    /// The post-build step moves the built module into the package
    /// directory so `import` finds it alongside the rest of the package.
    pub fn setup_py(&self) -> String {
        format!(
            r#"#!/usr/bin/python

from distutils.core import setup
from Cython.Build import cythonize
import shutil

setup(
    ext_modules = cythonize('{pyx}')
)

shutil.move('{module}', '{package}')
"#,
            pyx = self.paths.pyx_file.display(),
            module = self.paths.module_so.display(),
            package = self.paths.package_dir.display(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::QualifiedName;

    fn rectangle_paths() -> BindingPaths {
        let name = QualifiedName::parse("Gold::rectangle").unwrap();
        BindingPaths::derive("/opt/gold", &name)
    }

    #[test]
    fn test_prelude_names_artifact_and_search_dir() {
        let paths = rectangle_paths();
        let prelude = DistutilsGenerator::new(&paths).prelude();

        assert!(prelude.starts_with("# distutils: language = c++\n"));
        assert!(prelude.contains("# distutils: libraries = rectangle\n"));
        assert!(prelude.contains("# distutils: library_dirs = /opt/gold/lib\n"));
    }

    #[test]
    fn test_prelude_imports_containers() {
        let paths = rectangle_paths();
        let prelude = DistutilsGenerator::new(&paths).prelude();

        assert!(prelude.contains("from libcpp.string cimport string\n"));
        assert!(prelude.contains("from libcpp.vector cimport vector\n"));
        assert!(prelude.contains("from libcpp.map cimport map\n"));
    }

    #[test]
    fn test_setup_py_builds_and_relocates() {
        let paths = rectangle_paths();
        let setup = DistutilsGenerator::new(&paths).setup_py();

        assert!(setup.contains(
            "cythonize('/opt/gold/cplusplus/Gold/rectangle/python/Rectangle.pyx')"
        ));
        assert!(setup.contains(
            "shutil.move('/opt/gold/cplusplus/Gold/rectangle/python/Rectangle.so', '/opt/gold/python/Gold')"
        ));
    }
}
