use super::is_relevant_path;
use crate::error::{AutodocError, Result};
use crate::plugin::LanguagePlugin;
use autodoc_api::{PackageDoc, PublicSymbols};
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Public symbols of a single source file.
#[derive(Debug, Clone)]
pub struct SourceUnit {
    pub package: String,
    pub symbols: PublicSymbols,
}

pub struct Scanner;

impl Scanner {
    /// Documents every relevant file under `root` (or `root` itself when it is
    /// a file), merged per package and ordered by package name.
    pub fn scan(root: &Path, plugin: &dyn LanguagePlugin) -> Result<Vec<PackageDoc>> {
        if !root.exists() {
            return Err(AutodocError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} does not exist", root.display()),
            )));
        }

        let units = Self::scan_units(root, plugin);
        tracing::debug!(files = units.len(), root = %root.display(), "scanned sources");
        Ok(Self::group_by_package(units))
    }

    /// Parses files in parallel. Unreadable or unparsable files are logged and
    /// skipped. The result is ordered by path.
    pub fn scan_units(root: &Path, plugin: &dyn LanguagePlugin) -> Vec<SourceUnit> {
        Self::collect_paths(root, plugin)
            .par_iter()
            .filter_map(|path| match Self::process_file(path, plugin) {
                Ok(unit) => Some(unit),
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping file");
                    None
                }
            })
            .collect()
    }

    pub fn process_file(path: &Path, plugin: &dyn LanguagePlugin) -> Result<SourceUnit> {
        let source = fs::read_to_string(path)?;
        let (tree, symbols) = plugin.collect(&source)?;
        let package = plugin
            .package_name(&tree, &source)
            .unwrap_or_else(|| fallback_package(path));

        tracing::trace!(
            path = %path.display(),
            package = %package,
            functions = symbols.functions.len(),
            "collected file"
        );

        Ok(SourceUnit {
            package,
            symbols,
        })
    }

    pub fn group_by_package(units: Vec<SourceUnit>) -> Vec<PackageDoc> {
        let mut packages: BTreeMap<String, PackageDoc> = BTreeMap::new();
        for unit in units {
            packages
                .entry(unit.package.clone())
                .or_insert_with(|| PackageDoc::new(unit.package))
                .symbols
                .extend(unit.symbols);
        }
        packages.into_values().collect()
    }

    pub(crate) fn collect_paths(root: &Path, plugin: &dyn LanguagePlugin) -> Vec<PathBuf> {
        if root.is_file() {
            return vec![root.to_path_buf()];
        }

        let mut paths: Vec<PathBuf> = WalkBuilder::new(root)
            .build()
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let path = entry.path();
                if path.is_file() && is_relevant_path(path, plugin) {
                    return Some(path.to_path_buf());
                }
                None
            })
            .collect();
        paths.sort();
        paths
    }
}

/// Package name used when a file declares none: its directory name.
fn fallback_package(path: &Path) -> String {
    path.parent()
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .unwrap_or("main")
        .to_string()
}
