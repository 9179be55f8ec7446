/// Why a script does not follow the expected definition idiom.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    #[error("script does not end by returning a local variable")]
    NoReturnedLocal,

    #[error("no local declaration assigns a value to '{name}'")]
    NoLocalDefinition { name: String },

    #[error("definition of '{name}' never calls '{method}' with a local implementation table")]
    NoRegistrationCall { name: String, method: String },
}

impl AnalysisError {
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Why a method's signature could not be mapped to host types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignatureError {
    #[error("no method named '{0}'")]
    UnknownMethod(String),

    #[error("method declares {count} return types, at most one is supported")]
    MultipleReturnTypes { count: usize },

    #[error("unsupported type annotation shape: {0}")]
    UnsupportedTypeShape(String),

    #[error("unsupported generic type '{0}'")]
    UnsupportedGeneric(String),

    #[error("unknown type '{0}'")]
    UnknownType(String),

    #[error("parameter '{0}' has no type annotation")]
    MissingAnnotation(String),

    #[error("parameter '{0}' has an optional type")]
    OptionalParameter(String),
}

impl SignatureError {
    pub fn is_retryable(&self) -> bool {
        false
    }
}
