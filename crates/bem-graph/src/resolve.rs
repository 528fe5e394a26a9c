//! Reference resolution in both directions.
//!
//! Flat → graph resolves a target *name* against live objects of the allowed
//! target types; graph → flat resolves a weak *handle* to the referent's
//! current name. Neither direction normalizes names: matching is exact and
//! case-sensitive, because the external format is.

use bem_schema::ObjectType;

use crate::graph::ModelGraph;
use crate::handle::Handle;

/// Outcome of a by-name scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameLookup {
    /// No live object of an allowed type carries the name.
    None,
    Unique(Handle),
    /// Several live objects carry the name; `first` is the earliest by
    /// insertion order and is the one a caller should bind to.
    Ambiguous { first: Handle, matches: usize },
}

impl NameLookup {
    /// The handle to bind, if any. Ambiguous lookups bind their first match.
    pub fn handle(self) -> Option<Handle> {
        match self {
            NameLookup::None => None,
            NameLookup::Unique(h) | NameLookup::Ambiguous { first: h, .. } => Some(h),
        }
    }
}

/// Scan `graph` for a live object of one of `target_types` named `name`.
///
/// Duplicate names are a schema-authoring defect rather than an expected
/// runtime state; when encountered, the first discovered match wins and the
/// ambiguity is logged.
pub fn resolve_by_name(graph: &ModelGraph, target_types: &[ObjectType], name: &str) -> NameLookup {
    let mut first: Option<Handle> = None;
    let mut matches = 0usize;
    for object in graph.objects() {
        if !target_types.contains(&object.object_type()) {
            continue;
        }
        if object.name() == Some(name) {
            matches += 1;
            if first.is_none() {
                first = Some(object.handle());
            }
        }
    }
    match (first, matches) {
        (None, _) => NameLookup::None,
        (Some(h), 1) => NameLookup::Unique(h),
        (Some(h), n) => {
            tracing::warn!(name, matches = n, "duplicate object names; binding first match");
            NameLookup::Ambiguous { first: h, matches: n }
        }
    }
}

/// Current name of the live object behind `handle`.
///
/// `None` when the handle is dead — the caller reports that as a dangling
/// reference. Names are read at call time, never cached, so a rename after
/// the reference was formed is always reflected.
pub fn resolve_by_handle(graph: &ModelGraph, handle: Handle) -> Option<&str> {
    graph.object(handle).and_then(|o| o.name())
}
