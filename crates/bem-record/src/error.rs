use bem_schema::ObjectType;
use thiserror::Error;

/// Errors raised by the flat record store.
///
/// All of these indicate caller misuse of the store API against the schema
/// contract; none of them is an expected runtime condition.
#[derive(Debug, Error)]
pub enum RecordError {
    /// Scalar field index at or beyond the schema's scalar field count.
    #[error("field index {index} out of range (schema has {count} scalar fields)")]
    FieldIndexOutOfRange { index: usize, count: usize },

    /// Extensible group pushed with the wrong number of values.
    #[error("extensible group width mismatch: expected {expected}, got {actual}")]
    GroupWidthMismatch { expected: usize, actual: usize },

    /// Group operation on a schema with no extensible group.
    #[error("{object_type} has no extensible group")]
    NoExtensibleGroup { object_type: ObjectType },

    /// Extensible group index at or beyond the current repetition count.
    #[error("group index {index} out of range ({count} groups present)")]
    GroupIndexOutOfRange { index: usize, count: usize },
}

impl RecordError {
    pub fn field_index_out_of_range(index: usize, count: usize) -> Self {
        Self::FieldIndexOutOfRange { index, count }
    }

    pub fn group_width_mismatch(expected: usize, actual: usize) -> Self {
        Self::GroupWidthMismatch { expected, actual }
    }
}

/// Result type alias for record operations.
pub type Result<T> = std::result::Result<T, RecordError>;

/// Error raised by ordering queries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Comparison requested while a caller owns the order externally.
    #[error("type order is externally managed; comparison is not owned here")]
    OrderNotOwned,
}
