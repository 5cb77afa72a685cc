//! Facade result types for module generation

/// Options for [`crate::parse_module`]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleOptions {
    /// Elm module name to attach to the generated view body
    pub module_name: String,
}

impl ModuleOptions {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
        }
    }
}

/// A successfully generated module
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElmModule {
    pub module_name: String,
    pub view_body: String,
}

/// Outcome of running the facade over a file. Failures, whether I/O or
/// malformed markup, are carried as a message here and never escape as a
/// plain error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParserResult {
    Module(ElmModule),
    Failure { error: String },
}

impl ParserResult {
    pub const fn success(&self) -> bool {
        matches!(self, Self::Module(_))
    }

    pub fn module(&self) -> Option<&ElmModule> {
        match self {
            Self::Module(module) => Some(module),
            Self::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Module(_) => None,
            Self::Failure { error } => Some(error),
        }
    }
}
