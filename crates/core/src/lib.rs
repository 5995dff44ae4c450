pub mod error;
pub mod logging;

pub mod collector;
pub mod parser;
pub mod plugin;
pub mod project;
pub mod render;
pub mod writer;

pub use collector::SymbolCollector;
pub use error::Result;
pub use parser::{SymbolGrammar, SyntaxNode};
pub use render::{DocRenderer, MarkdownStyle};
