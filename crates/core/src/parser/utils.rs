use super::SyntaxNode;
use crate::error::{AutodocError, Result};
use std::ops::Range;
use tree_sitter::{Language, Node, Parser, Query, Tree};

impl<'tree> SyntaxNode for Node<'tree> {
    fn kind(&self) -> &str {
        Node::kind(self)
    }

    fn byte_range(&self) -> Range<usize> {
        Node::byte_range(self)
    }

    fn child_by_field(&self, field: &str) -> Option<Self> {
        self.child_by_field_name(field)
    }

    fn child_nodes(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        self.children(&mut cursor).collect()
    }

    fn named_child_nodes(&self) -> Vec<Self> {
        let mut cursor = self.walk();
        self.named_children(&mut cursor).collect()
    }

    fn prev_named_sibling(&self) -> Option<Self> {
        Node::prev_named_sibling(self)
    }
}

/// Parses `source` with a fresh parser for `language`.
pub fn parse_source(language: &Language, source: &str) -> Result<Tree> {
    let mut parser = Parser::new();
    parser
        .set_language(language)
        .map_err(|e| AutodocError::Parsing(e.to_string()))?;

    parser
        .parse(source, None)
        .ok_or_else(|| AutodocError::Parsing("parser produced no tree".to_string()))
}

/// Loads a Tree-sitter query from an SCM string.
pub fn load_query(language: &Language, scm: &str) -> Result<Query> {
    Query::new(language, scm).map_err(|e| AutodocError::Parsing(format!("Invalid query: {:?}", e)))
}

/// Gets the index of a capture name in a query.
pub fn get_capture_index(query: &Query, name: &str) -> Result<u32> {
    query
        .capture_index_for_name(name)
        .ok_or_else(|| AutodocError::Parsing(format!("Capture name '{}' not found in SCM", name)))
}

/// Defines a struct of capture indices with a `new` method resolving them from a query.
#[macro_export]
macro_rules! decl_indices {
    ($name:ident, { $($field:ident => $capture:expr),+ $(,)? }) => {
        #[derive(Clone)]
        pub struct $name {
            $(pub $field: u32,)+
        }

        impl $name {
            pub fn new(query: &tree_sitter::Query) -> $crate::error::Result<Self> {
                Ok(Self {
                    $($field: $crate::parser::utils::get_capture_index(query, $capture)?,)+
                })
            }
        }
    };
}
