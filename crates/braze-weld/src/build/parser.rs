//! External header parser collaborator
//!
//! The native-header parser is a black box: an executable that reads a
//! C++ header and dumps a JSON class tree on stdout. This module only
//! defines the boundary and decodes the tree.

use crate::error::{WeldError, WeldResult};
use crate::ir::RawHeader;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Source of raw parsed class trees
pub trait HeaderParser {
    /// Produce the parsed tree for one header file
    fn parse(&self, header: &Path) -> WeldResult<RawHeader>;
}

/// Runs an external dump executable and decodes its JSON output
pub struct DumpCommand {
    program: String,
}

impl DumpCommand {
    /// Dump executable used when none is configured
    pub const DEFAULT_PROGRAM: &'static str = "cppheaderdump";

    /// Create a parser invoking `program <header>`
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for DumpCommand {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PROGRAM)
    }
}

impl HeaderParser for DumpCommand {
    fn parse(&self, header: &Path) -> WeldResult<RawHeader> {
        let output = Command::new(&self.program)
            .arg(header)
            .output()
            .map_err(|e| {
                WeldError::parse(format!("failed to run {}: {}", self.program, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(WeldError::parse(format!(
                "{} failed on {}: {}",
                self.program,
                header.display(),
                stderr.trim()
            )));
        }

        serde_json::from_slice(&output.stdout).map_err(|e| {
            WeldError::parse(format!(
                "{} produced an undecodable tree for {}: {}",
                self.program,
                header.display(),
                e
            ))
        })
    }
}

/// Reads a pre-dumped JSON tree from disk
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    /// Create a parser reading the dumped tree at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl HeaderParser for JsonFile {
    fn parse(&self, _header: &Path) -> WeldResult<RawHeader> {
        let text = fs::read_to_string(&self.path)?;
        RawHeader::from_json(&text).map_err(|e| {
            WeldError::parse(format!(
                "undecodable tree in {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const TREE: &str = r#"{
        "classes": {
            "rectangle": {
                "methods": {
                    "public": [
                        {"name": "getArea", "rtnType": "int", "parameters": []}
                    ]
                }
            }
        }
    }"#;

    #[test]
    fn test_json_file_roundtrip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TREE.as_bytes()).unwrap();

        let tree = JsonFile::new(file.path())
            .parse(Path::new("rectangle.hpp"))
            .unwrap();
        assert!(tree.class("rectangle").is_some());
    }

    #[test]
    fn test_json_file_undecodable() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not json").unwrap();

        let err = JsonFile::new(file.path())
            .parse(Path::new("rectangle.hpp"))
            .unwrap_err();
        assert!(matches!(err, WeldError::HeaderParse(_)));
    }

    #[test]
    fn test_dump_command_missing_program() {
        let err = DumpCommand::new("braze-test-no-such-dump-tool")
            .parse(Path::new("rectangle.hpp"))
            .unwrap_err();
        assert!(matches!(err, WeldError::HeaderParse(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_dump_command_decodes_stdout() {
        // `cat <file>` stands in for a real dump tool.
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(TREE.as_bytes()).unwrap();

        let tree = DumpCommand::new("cat").parse(file.path()).unwrap();
        assert!(tree.class("rectangle").is_some());
    }
}
