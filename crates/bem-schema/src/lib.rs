//! Object-type catalog and field schemas for the flat record format.
//!
//! Every record the engine reads or writes conforms to one of the schemas
//! defined here: an ordered list of typed scalar fields, optionally followed
//! by one repeatable fixed-width field group. The catalog is a closed
//! enumeration compiled into the binary and immutable after process start.

pub mod error;
pub mod field;
pub mod fields;
pub mod object_type;
pub mod registry;

pub use error::{Result, SchemaError};
pub use field::{DefaultValue, ExtensibleGroup, FieldDefinition, FieldKind, ObjectTypeSchema};
pub use object_type::ObjectType;
pub use registry::{SchemaRegistry, extensible_group_width, field_definition, registry, schema_for};
