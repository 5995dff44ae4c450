use serde::{Deserialize, Serialize};

/// An exported function together with the doc comment block directly above it.
///
/// `comments` keeps the raw comment texts (markers included) in source order,
/// earliest first.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct FunctionSymbol {
    pub identifier: String,
    pub comments: Vec<String>,
}

impl FunctionSymbol {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            comments: Vec::new(),
        }
    }

    pub fn with_comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.comments = comments.into_iter().map(Into::into).collect();
        self
    }
}

/// Exported symbols of one syntax tree, in traversal order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct PublicSymbols {
    pub functions: Vec<FunctionSymbol>,
    pub constants: Vec<String>,
    pub variables: Vec<String>,
}

impl PublicSymbols {
    /// Appends every sequence of `other` after the ones already held.
    pub fn extend(&mut self, other: PublicSymbols) {
        self.functions.extend(other.functions);
        self.constants.extend(other.constants);
        self.variables.extend(other.variables);
    }

    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.iter().map(|f| f.identifier.as_str())
    }
}

/// Symbols of every file sharing one package clause.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PackageDoc {
    pub package: String,
    pub symbols: PublicSymbols,
}

impl PackageDoc {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            symbols: PublicSymbols::default(),
        }
    }
}
