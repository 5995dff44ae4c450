pub mod parser;
pub mod queries;

use autodoc_core::error::Result;
use autodoc_core::parser::SymbolGrammar;
use autodoc_core::plugin::LanguagePlugin;
use autodoc_core::render::MarkdownStyle;
use tree_sitter::Tree;

pub use parser::GoParser;

pub struct GoPlugin {
    parser: GoParser,
}

impl GoPlugin {
    pub fn new() -> Result<Self> {
        Ok(Self {
            parser: GoParser::new()?,
        })
    }
}

impl LanguagePlugin for GoPlugin {
    fn supported_extensions(&self) -> &[&str] {
        &["go"]
    }

    fn grammar(&self) -> SymbolGrammar {
        SymbolGrammar::go()
    }

    fn markdown_style(&self) -> MarkdownStyle {
        MarkdownStyle::go()
    }

    fn parse(&self, source: &str) -> Result<Tree> {
        self.parser.parse(source)
    }

    fn package_name(&self, tree: &Tree, source: &str) -> Option<String> {
        self.parser.extract_package(tree, source)
    }
}
