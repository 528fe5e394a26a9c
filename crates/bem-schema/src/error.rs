use thiserror::Error;

/// Errors raised at the schema boundary.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// External type name not present in the catalog.
    ///
    /// Inside the process the catalog is a closed enum, so an unknown type
    /// *value* is unrepresentable; this error can only originate from an
    /// external name, which is why it carries the offending string.
    #[error("unknown object type: {name}")]
    UnknownSchema { name: String },
}

impl SchemaError {
    /// Create an UnknownSchema error.
    pub fn unknown_schema(name: impl Into<String>) -> Self {
        Self::UnknownSchema { name: name.into() }
    }
}

/// Result type alias for schema operations.
pub type Result<T> = std::result::Result<T, SchemaError>;
