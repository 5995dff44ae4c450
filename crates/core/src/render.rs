use autodoc_api::{FunctionSymbol, PackageDoc};
use serde::{Deserialize, Serialize};

/// Per-language knobs of the markdown output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkdownStyle {
    /// Single-line comment marker stripped from each comment line.
    pub comment_marker: String,
    /// Info string of the fenced signature block.
    pub fence_lang: String,
}

impl MarkdownStyle {
    pub fn new(comment_marker: impl Into<String>, fence_lang: impl Into<String>) -> Self {
        Self {
            comment_marker: comment_marker.into(),
            fence_lang: fence_lang.into(),
        }
    }

    pub fn go() -> Self {
        Self::new("//", "go")
    }
}

impl Default for MarkdownStyle {
    fn default() -> Self {
        Self::go()
    }
}

/// Turns collected symbols into markdown.
#[derive(Debug, Clone, Default)]
pub struct DocRenderer {
    style: MarkdownStyle,
}

impl DocRenderer {
    pub fn new(style: MarkdownStyle) -> Self {
        Self { style }
    }

    /// Renders the doc comment of `symbol` followed by a fenced block holding
    /// its identifier.
    ///
    /// A comment consisting only of the marker becomes an empty line, so
    /// paragraph breaks of the original block survive.
    pub fn to_markdown(&self, symbol: &FunctionSymbol) -> String {
        let body = symbol
            .comments
            .iter()
            .map(|comment| self.clean_comment(comment))
            .collect::<Vec<_>>()
            .join("\n");

        let mut out = String::with_capacity(body.len() + symbol.identifier.len() + 16);
        out.push_str(&body);
        out.push_str("\n\n");
        out.push_str("```");
        out.push_str(&self.style.fence_lang);
        out.push('\n');
        out.push_str(&symbol.identifier);
        out.push_str("\n```\n");
        out
    }

    /// Renders every symbol of a package as one document.
    pub fn render_package(&self, doc: &PackageDoc) -> String {
        let mut out = format!("# Package {}\n", doc.package);

        if !doc.symbols.constants.is_empty() {
            out.push_str("\n## Constants\n\n");
            push_bullets(&mut out, &doc.symbols.constants);
        }

        if !doc.symbols.variables.is_empty() {
            out.push_str("\n## Variables\n\n");
            push_bullets(&mut out, &doc.symbols.variables);
        }

        if !doc.symbols.functions.is_empty() {
            out.push_str("\n## Functions\n");
            for func in &doc.symbols.functions {
                out.push_str("\n### ");
                out.push_str(&func.identifier);
                out.push_str("\n\n");
                out.push_str(&self.to_markdown(func));
            }
        }

        out
    }

    fn clean_comment<'c>(&self, comment: &'c str) -> &'c str {
        let marker = self.style.comment_marker.as_str();
        let stripped = if marker.is_empty() {
            comment
        } else {
            comment.strip_prefix(marker).unwrap_or(comment)
        };
        stripped.trim()
    }
}

fn push_bullets(out: &mut String, names: &[String]) {
    for name in names {
        out.push_str("- `");
        out.push_str(name);
        out.push_str("`\n");
    }
}
