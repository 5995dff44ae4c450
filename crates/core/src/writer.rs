use crate::error::{AutodocError, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// File name of the generated document inside each package directory.
pub const DOC_FILE_NAME: &str = "doc.md";

/// Where the document of `package` lands under `root`.
pub fn doc_path(root: &Path, package: &str) -> Result<PathBuf> {
    let mut components = Path::new(package).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) if !package.contains(['/', '\\']) => {
            Ok(root.join(package).join(DOC_FILE_NAME))
        }
        _ => Err(AutodocError::InvalidPackage(package.to_string())),
    }
}

/// Writes `content` to `<root>/<package>/doc.md`, creating directories as
/// needed, and returns the written path.
pub fn write_doc(root: &Path, package: &str, content: &str) -> Result<PathBuf> {
    let path = doc_path(root, package)?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    fs::write(&path, content)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote package doc");
    Ok(path)
}
