use std::ops::Range;

pub mod utils;

/// Read-only view of a syntax-tree node, as produced by an external parser.
///
/// The collector only depends on this trait, so any tree that can answer these
/// questions (tree-sitter or a hand-built one) can be documented.
pub trait SyntaxNode: Sized + Clone {
    /// Grammar type tag, e.g. `function_declaration`.
    fn kind(&self) -> &str;

    /// Byte span of this node in the source it was parsed from.
    fn byte_range(&self) -> Range<usize>;

    fn child_by_field(&self, field: &str) -> Option<Self>;

    /// All direct children, punctuation included, in source order.
    fn child_nodes(&self) -> Vec<Self>;

    /// Direct children the grammar marks as named, in source order.
    fn named_child_nodes(&self) -> Vec<Self>;

    fn prev_named_sibling(&self) -> Option<Self>;

    /// Slices the node's span out of `source`. Returns `None` if the span does
    /// not land on char boundaries of `source`.
    fn text<'s>(&self, source: &'s str) -> Option<&'s str> {
        source.get(self.byte_range())
    }
}

/// The type tags a grammar uses for the declaration shapes the collector
/// understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolGrammar {
    pub function_declaration: &'static str,
    pub const_declaration: &'static str,
    pub var_declaration: &'static str,
    pub comment: &'static str,
    pub identifier: &'static str,
    /// Wrapper nodes that hold the specs of a parenthesized group.
    pub spec_lists: &'static [&'static str],
    pub name_field: &'static str,
}

impl SymbolGrammar {
    /// Node shapes of tree-sitter-go.
    pub const fn go() -> Self {
        Self {
            function_declaration: "function_declaration",
            const_declaration: "const_declaration",
            var_declaration: "var_declaration",
            comment: "comment",
            identifier: "identifier",
            spec_lists: &["var_spec_list"],
            name_field: "name",
        }
    }

    pub fn is_spec_list(&self, kind: &str) -> bool {
        self.spec_lists.contains(&kind)
    }
}

impl Default for SymbolGrammar {
    fn default() -> Self {
        Self::go()
    }
}
