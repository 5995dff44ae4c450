use crate::collector::SymbolCollector;
use crate::error::Result;
use crate::parser::SymbolGrammar;
use crate::render::MarkdownStyle;
use autodoc_api::PublicSymbols;
use tree_sitter::Tree;

/// Unified interface for language-specific support.
pub trait LanguagePlugin: Send + Sync {
    /// Supported file extensions
    fn supported_extensions(&self) -> &[&str];

    /// Node type tags the collector keys on for this language.
    fn grammar(&self) -> SymbolGrammar;

    fn markdown_style(&self) -> MarkdownStyle;

    fn parse(&self, source: &str) -> Result<Tree>;

    /// Package (module) the file declares, if the language has one.
    fn package_name(&self, tree: &Tree, source: &str) -> Option<String>;

    /// Parses `source` and collects its public symbols.
    fn collect(&self, source: &str) -> Result<(Tree, PublicSymbols)> {
        let tree = self.parse(source)?;
        let symbols = SymbolCollector::new(source, self.grammar()).collect(tree.root_node());
        Ok((tree, symbols))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        self.supported_extensions()
            .iter()
            .any(|e| e.eq_ignore_ascii_case(ext))
    }
}
