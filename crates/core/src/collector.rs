use crate::parser::{SymbolGrammar, SyntaxNode};
use autodoc_api::{FunctionSymbol, PublicSymbols};
use std::collections::VecDeque;

/// Walks a syntax tree and collects its exported functions, constants and
/// variables.
///
/// A symbol is exported when the first character of its identifier is an
/// uppercase letter. Nodes that do not have the expected shape are skipped,
/// never reported.
pub struct SymbolCollector<'s> {
    source: &'s str,
    grammar: SymbolGrammar,
}

impl<'s> SymbolCollector<'s> {
    pub fn new(source: &'s str, grammar: SymbolGrammar) -> Self {
        Self { source, grammar }
    }

    /// Breadth-first pass over every node under `root`.
    pub fn collect<N: SyntaxNode>(&self, root: N) -> PublicSymbols {
        let mut symbols = PublicSymbols::default();
        let mut queue = VecDeque::from([root]);

        while let Some(node) = queue.pop_front() {
            let kind = node.kind();
            if kind == self.grammar.function_declaration {
                if let Some(func) = self.public_function(&node) {
                    symbols.functions.push(func);
                }
            } else if kind == self.grammar.const_declaration {
                symbols.constants.extend(self.public_names(&node));
            } else if kind == self.grammar.var_declaration {
                symbols.variables.extend(self.public_names(&node));
            }

            queue.extend(node.child_nodes());
        }

        tracing::trace!(
            functions = symbols.functions.len(),
            constants = symbols.constants.len(),
            variables = symbols.variables.len(),
            "collected public symbols"
        );
        symbols
    }

    fn public_function<N: SyntaxNode>(&self, node: &N) -> Option<FunctionSymbol> {
        let name = node.child_by_field(self.grammar.name_field)?;
        let identifier = name.text(self.source)?;
        if !is_exported(identifier) {
            return None;
        }

        Some(FunctionSymbol {
            identifier: identifier.to_string(),
            comments: self.leading_comments(node),
        })
    }

    /// The run of comment siblings directly above `node`, earliest first.
    fn leading_comments<N: SyntaxNode>(&self, node: &N) -> Vec<String> {
        let mut comments = Vec::new();
        let mut prev = node.prev_named_sibling();
        while let Some(sibling) = prev {
            if sibling.kind() != self.grammar.comment {
                break;
            }
            if let Some(text) = sibling.text(self.source) {
                comments.push(text.to_string());
            }
            prev = sibling.prev_named_sibling();
        }
        comments.reverse();
        comments
    }

    /// Exported identifiers of a const/var declaration, single or grouped.
    fn public_names<N: SyntaxNode>(&self, declaration: &N) -> Vec<String> {
        let mut names = Vec::new();
        for spec in self.specs(declaration) {
            for child in spec.named_child_nodes() {
                if child.kind() != self.grammar.identifier {
                    continue;
                }
                if let Some(name) = child.text(self.source) {
                    if is_exported(name) {
                        names.push(name.to_string());
                    }
                }
            }
        }
        names
    }

    fn specs<N: SyntaxNode>(&self, declaration: &N) -> Vec<N> {
        let mut specs = Vec::new();
        for child in declaration.named_child_nodes() {
            if self.grammar.is_spec_list(child.kind()) {
                specs.extend(child.named_child_nodes());
            } else {
                specs.push(child);
            }
        }
        specs
    }
}

/// True when the first character of `identifier` is uppercase (Unicode aware).
pub fn is_exported(identifier: &str) -> bool {
    identifier.chars().next().is_some_and(char::is_uppercase)
}
