//! Document discovery and loading.
//!
//! The loader owns all file I/O for a run. Everything downstream works
//! on in-memory `(path, text)` pairs and never touches the filesystem.

use crate::error::SpecgateError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions accepted when scanning the input root. Files with no
/// extension are also accepted; hidden files never are.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["txt", "md", "markdown", "rst", "text"];

/// Which pile a document belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Source material: stakeholder notes, requirements, principles.
    Input,
    /// The candidate specification under verification.
    Specification,
}

/// One loaded document. Immutable for the duration of a run.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub kind: DocumentKind,
    pub raw_text: String,
}

/// Recursively discover and load every supported document under `root`.
///
/// Hidden files and hidden directories are skipped. Discovered paths are
/// sorted lexicographically so extraction order (and therefore report
/// order) is deterministic. An empty result is not an error: the run
/// proceeds with empty statement sets and the coverage checks surface
/// the consequences.
pub fn load_input_root(root: &Path) -> Result<Vec<Document>, SpecgateError> {
    if !root.is_dir() {
        return Err(SpecgateError::InputNotFound(format!(
            "input root is not a directory: {}",
            root.display()
        )));
    }

    let mut paths = Vec::new();
    collect_supported(root, &mut paths)?;
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        documents.push(Document {
            raw_text: read_text(&path)?,
            kind: DocumentKind::Input,
            path,
        });
    }
    Ok(documents)
}

/// Load the specification file itself.
pub fn load_specification(path: &Path) -> Result<Document, SpecgateError> {
    if !path.is_file() {
        return Err(SpecgateError::InputNotFound(format!(
            "specification is not a regular file: {}",
            path.display()
        )));
    }
    Ok(Document {
        raw_text: read_text(path)?,
        kind: DocumentKind::Specification,
        path: path.to_path_buf(),
    })
}

fn read_text(path: &Path) -> Result<String, SpecgateError> {
    fs::read_to_string(path).map_err(|source| SpecgateError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn collect_supported(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), SpecgateError> {
    let entries = fs::read_dir(dir).map_err(|source| SpecgateError::Read {
        path: dir.to_path_buf(),
        source,
    })?;
    for entry in entries {
        let entry = entry.map_err(|source| SpecgateError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if is_hidden(&path) {
            continue;
        }
        if path.is_dir() {
            collect_supported(&path, out)?;
        } else if path.is_file() && is_supported(&path) {
            out.push(path);
        }
    }
    Ok(())
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

fn is_supported(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        }
        // Extensionless files are fair game (READMEs, plain notes).
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    struct TempDirGuard {
        path: PathBuf,
    }

    impl TempDirGuard {
        fn new(prefix: &str) -> Self {
            let unique = std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .expect("clock should be after unix epoch")
                .as_nanos();
            let path = std::env::temp_dir().join(format!(
                "specgate-kernel-{prefix}-{}-{unique}",
                std::process::id()
            ));
            fs::create_dir_all(&path).expect("temp dir should be created");
            Self { path }
        }

        fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Drop for TempDirGuard {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.path);
        }
    }

    #[test]
    fn discovery_filters_and_sorts() {
        let dir = TempDirGuard::new("discovery");
        let root = dir.path();
        fs::write(root.join("b.md"), "b").unwrap();
        fs::write(root.join("a.txt"), "a").unwrap();
        fs::write(root.join("notes"), "extensionless").unwrap();
        fs::write(root.join(".hidden.md"), "hidden").unwrap();
        fs::write(root.join("image.png"), "binary-ish").unwrap();
        fs::create_dir_all(root.join("sub")).unwrap();
        fs::write(root.join("sub/c.rst"), "c").unwrap();
        fs::create_dir_all(root.join(".git")).unwrap();
        fs::write(root.join(".git/config.md"), "never").unwrap();

        let docs = load_input_root(root).unwrap();
        let names: Vec<String> = docs
            .iter()
            .map(|d| {
                d.path
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        assert_eq!(names, ["a.txt", "b.md", "notes", "sub/c.rst"]);
        assert!(docs.iter().all(|d| d.kind == DocumentKind::Input));
    }

    #[test]
    fn empty_root_is_not_an_error() {
        let dir = TempDirGuard::new("empty");
        let docs = load_input_root(dir.path()).unwrap();
        assert!(docs.is_empty());
    }

    #[test]
    fn missing_root_is_fatal() {
        let dir = TempDirGuard::new("missing");
        let err = load_input_root(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, SpecgateError::InputNotFound(_)));
    }

    #[test]
    fn specification_must_be_a_file() {
        let dir = TempDirGuard::new("specdir");
        let err = load_specification(dir.path()).unwrap_err();
        assert!(matches!(err, SpecgateError::InputNotFound(_)));

        let path = dir.path().join("spec.md");
        fs::write(&path, "SPEC-001: something").unwrap();
        let doc = load_specification(&path).unwrap();
        assert_eq!(doc.kind, DocumentKind::Specification);
        assert_eq!(doc.raw_text, "SPEC-001: something");
    }
}
