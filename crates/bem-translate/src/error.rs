use bem_graph::{GraphError, Handle};
use bem_record::RecordError;
use bem_schema::{ObjectType, SchemaError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Contract violations during translation. These propagate immediately;
/// data-dependent conditions go through [`TranslationWarning`] instead.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// The handle passed for translation is not live in the graph.
    #[error("no live object behind handle {handle}")]
    DeadHandle { handle: Handle },

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    Record(#[from] RecordError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Result type alias for translation operations.
pub type Result<T> = std::result::Result<T, TranslationError>;

/// Position of a field within a record: scalar, or a cell of one extensible
/// repetition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldRef {
    Scalar(usize),
    Group { group: usize, field: usize },
}

impl fmt::Display for FieldRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRef::Scalar(index) => write!(f, "field {index}"),
            FieldRef::Group { group, field } => write!(f, "group {group} field {field}"),
        }
    }
}

/// Data-dependent conditions accumulated on a translation session.
///
/// None of these aborts a batch: the engine favors best-effort partial
/// translation with a complete warning log, because a model commonly holds
/// forward references that a later pass resolves.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum TranslationWarning {
    /// A by-name reference found no live target; the field was left unset.
    #[error("{object_type} '{object_name}': reference '{target_name}' in {field} did not resolve")]
    UnresolvedReference {
        object_type: ObjectType,
        object_name: String,
        field: FieldRef,
        target_name: String,
    },

    /// A graph-side reference handle is no longer live; the field was
    /// omitted from the output record.
    #[error("{object_type} '{object_name}': reference in {field} points at a deleted object")]
    DanglingReference {
        object_type: ObjectType,
        object_name: String,
        field: FieldRef,
    },

    /// Several live objects share the referenced name; the first discovered
    /// match was bound.
    #[error("multiple objects named '{target_name}'; first match used")]
    DuplicateName { target_name: String },
}
