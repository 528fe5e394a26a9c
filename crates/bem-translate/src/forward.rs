use bem_graph::{Handle, ModelGraph, resolve_by_handle};
use bem_record::{FlatRecord, Value};

use crate::error::{FieldRef, Result, TranslationError, TranslationWarning};
use crate::strategy::{normalize_to_base_scale, strategy_for};

/// Graph → flat translation session.
///
/// One translator serves one batch; data-dependent conditions accumulate as
/// warnings on the session and never abort it. Translation of one object is
/// an atomic synchronous unit — a caller aborting a batch simply stops
/// issuing calls, and already-emitted records stand.
#[derive(Debug, Default)]
pub struct ForwardTranslator {
    warnings: Vec<TranslationWarning>,
}

impl ForwardTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Warnings recorded so far, in the order they were encountered.
    pub fn warnings(&self) -> &[TranslationWarning] {
        &self.warnings
    }

    /// Drain the warning log.
    pub fn take_warnings(&mut self) -> Vec<TranslationWarning> {
        std::mem::take(&mut self.warnings)
    }

    /// Translate one live object into a schema-conformant record.
    ///
    /// Scalar cells are written in field-index order; group pushes follow
    /// the model-side sequence order exactly, since group index carries
    /// meaning across collaborating objects. Repeated calls on an
    /// unmodified object yield identical records. Dependent objects are
    /// never translated implicitly — queueing them is the caller's job.
    pub fn translate_object(&mut self, graph: &ModelGraph, handle: Handle) -> Result<FlatRecord> {
        let object = graph
            .object(handle)
            .ok_or(TranslationError::DeadHandle { handle })?;
        let schema = object.schema();
        let object_name = object.name().unwrap_or_default().to_owned();
        let mut record = FlatRecord::new(object.object_type());

        for field in schema.fields {
            if field.is_reference() {
                let Some(target) = object.reference(field.index) else {
                    continue;
                };
                match resolve_by_handle(graph, target) {
                    // Always the referent's current name; never a cached one.
                    Some(name) => {
                        record.set_value(field.index, Value::Ref(name.to_owned()))?;
                    }
                    None => {
                        tracing::warn!(
                            object_type = %object.object_type(),
                            object_name,
                            field = field.index,
                            "dangling reference; field omitted from output"
                        );
                        self.warnings.push(TranslationWarning::DanglingReference {
                            object_type: object.object_type(),
                            object_name: object_name.clone(),
                            field: FieldRef::Scalar(field.index),
                        });
                    }
                }
            } else {
                let value = object.value(field.index)?;
                if value.is_absent() {
                    continue;
                }
                let emitted = match (value, field.unit_hint) {
                    (Value::Real(v), Some(hint)) => Value::Real(normalize_to_base_scale(*v, hint)),
                    _ => value.clone(),
                };
                record.set_value(field.index, emitted)?;
            }
        }

        record.clear_extensible_groups();
        for group in object.groups() {
            let mut cells = Vec::with_capacity(group.width());
            for field in 0..group.width() {
                let is_reference =
                    schema.group_field(field).is_some_and(|f| f.is_reference());
                if is_reference {
                    match group.reference(field) {
                        Some(target) => match resolve_by_handle(graph, target) {
                            Some(name) => cells.push(Value::Ref(name.to_owned())),
                            None => {
                                tracing::warn!(
                                    object_type = %object.object_type(),
                                    object_name,
                                    group = group.index(),
                                    field,
                                    "dangling group reference; cell left absent"
                                );
                                self.warnings.push(TranslationWarning::DanglingReference {
                                    object_type: object.object_type(),
                                    object_name: object_name.clone(),
                                    field: FieldRef::Group { group: group.index(), field },
                                });
                                cells.push(Value::Absent);
                            }
                        },
                        None => cells.push(Value::Absent),
                    }
                } else {
                    cells.push(group.value(field).cloned().unwrap_or(Value::Absent));
                }
            }
            record.push_extensible_group(cells)?;
        }

        if let Some(adjust) = strategy_for(object.object_type()).forward {
            adjust(object, &mut record)?;
        }
        Ok(record)
    }

    /// Translate every live object, in the graph's insertion order.
    ///
    /// The relative order of the emitted records is exactly the iteration
    /// order; serialization order is a separate, explicit step against a
    /// type order.
    pub fn translate_graph(&mut self, graph: &ModelGraph) -> Result<Vec<FlatRecord>> {
        graph
            .handles()
            .map(|handle| self.translate_object(graph, handle))
            .collect()
    }
}
