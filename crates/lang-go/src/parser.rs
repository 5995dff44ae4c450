use crate::queries::go_definitions::{GO_DEFINITIONS_SCM, GoIndices};
use autodoc_core::error::Result;
use autodoc_core::parser::utils::{load_query, parse_source};
use std::sync::Arc;
use tree_sitter::{Query, QueryCursor, StreamingIterator, Tree};

pub struct GoParser {
    pub language: tree_sitter::Language,
    pub(crate) definition_query: Arc<Query>,
    pub(crate) indices: GoIndices,
}

impl Clone for GoParser {
    fn clone(&self) -> Self {
        Self {
            language: self.language.clone(),
            definition_query: Arc::clone(&self.definition_query),
            indices: self.indices.clone(),
        }
    }
}

impl GoParser {
    pub fn new() -> Result<Self> {
        let language: tree_sitter::Language = tree_sitter_go::LANGUAGE.into();
        let definition_query = load_query(&language, GO_DEFINITIONS_SCM)?;
        let indices = GoIndices::new(&definition_query)?;

        Ok(Self {
            language,
            definition_query: Arc::new(definition_query),
            indices,
        })
    }

    pub fn parse(&self, source: &str) -> Result<Tree> {
        parse_source(&self.language, source)
    }

    /// Name from the file's `package` clause.
    pub fn extract_package(&self, tree: &Tree, source: &str) -> Option<String> {
        let mut cursor = QueryCursor::new();
        let mut matches =
            cursor.matches(&self.definition_query, tree.root_node(), source.as_bytes());
        while let Some(mat) = matches.next() {
            if let Some(cap) = mat.captures.iter().find(|c| c.index == self.indices.package) {
                if let Ok(name) = cap.node.utf8_text(source.as_bytes()) {
                    return Some(name.to_string());
                }
            }
        }
        None
    }
}
