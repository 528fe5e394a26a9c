//! Flat record store: the substrate both translators read and write.
//!
//! A [`FlatRecord`] is one schema-conformant instance of an object type —
//! ordered scalar cells plus repeated extensible groups — addressed through
//! the field constants in [`bem_schema::fields`]. The [`RecordStore`] owns
//! records, assigns stable handles, and produces serialization order through
//! a [`TypeOrder`].

pub mod error;
pub mod order;
pub mod record;
pub mod store;
pub mod value;

pub use error::{OrderError, RecordError, Result};
pub use order::TypeOrder;
pub use record::FlatRecord;
pub use store::{RecordHandle, RecordStore};
pub use value::Value;
