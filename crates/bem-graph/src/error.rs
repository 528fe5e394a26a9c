use bem_record::RecordError;
use thiserror::Error;

/// Errors raised by graph-side object accessors.
#[derive(Debug, Error)]
pub enum GraphError {
    /// A reference operation addressed a field whose kind is not
    /// object-reference.
    #[error("field {index} of {object_type} is not a reference field")]
    NotAReferenceField { object_type: bem_schema::ObjectType, index: usize },

    /// A non-reference accessor addressed a reference field.
    #[error("field {index} of {object_type} is a reference field; use the reference accessors")]
    IsAReferenceField { object_type: bem_schema::ObjectType, index: usize },

    /// Contract violation bubbled up from the backing record.
    #[error(transparent)]
    Record(#[from] RecordError),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
