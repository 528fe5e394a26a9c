//! Translation between the model object graph and flat records.
//!
//! [`ForwardTranslator`] walks live graph objects and emits one
//! schema-conformant [`bem_record::FlatRecord`] per object, resolving
//! graph-side reference handles to current target names.
//! [`ReverseTranslator`] replays records into a graph, resolving names back
//! to handles and parking forward references for an explicit second pass.
//! Both directions accumulate data-dependent conditions as warnings on the
//! session rather than failing the batch.

pub mod error;
pub mod forward;
pub mod reverse;
mod strategy;

pub use error::{FieldRef, Result, TranslationError, TranslationWarning};
pub use forward::ForwardTranslator;
pub use reverse::ReverseTranslator;
