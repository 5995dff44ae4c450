pub mod scanner;

use crate::plugin::LanguagePlugin;
use std::path::Path;

/// Checks if a path is a source file the plugin can document.
pub fn is_relevant_path(path: &Path, plugin: &dyn LanguagePlugin) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| plugin.supports_extension(ext))
        .unwrap_or(false)
}
