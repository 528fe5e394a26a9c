use bem_graph::{GroupCell, Handle, ModelGraph, NameLookup, resolve_by_name};
use bem_record::{FlatRecord, Value};
use bem_schema::ObjectType;

use crate::error::{FieldRef, Result, TranslationWarning};
use crate::strategy::{normalize_to_base_scale, strategy_for};

#[derive(Debug)]
struct PendingReference {
    object: Handle,
    field: FieldRef,
    target_types: &'static [ObjectType],
    target_name: String,
}

/// Flat → graph translation session.
///
/// References resolve by name against objects already in the graph. A name
/// that does not resolve yet is a legitimate state — flat collections
/// routinely reference forward — so the field is left unset, a warning is
/// recorded, and the reference is parked for [`ReverseTranslator::resolve_pending`],
/// which the caller runs as a second pass once the batch is in.
#[derive(Debug, Default)]
pub struct ReverseTranslator {
    warnings: Vec<TranslationWarning>,
    pending: Vec<PendingReference>,
}

impl ReverseTranslator {
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

    /// References still waiting for their target to appear.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn lookup(
        &mut self,
        graph: &ModelGraph,
        target_types: &'static [ObjectType],
        name: &str,
    ) -> Option<Handle> {
        match resolve_by_name(graph, target_types, name) {
            NameLookup::Unique(handle) => Some(handle),
            NameLookup::Ambiguous { first, .. } => {
                self.warnings.push(TranslationWarning::DuplicateName {
                    target_name: name.to_owned(),
                });
                Some(first)
            }
            NameLookup::None => None,
        }
    }

    /// Build one model object from a record.
    ///
    /// Only present cells are copied: an absent field leaves the model's own
    /// default in force, preserving the distinction between "explicitly set
    /// to the default value" and "never set". Extensible groups replay in
    /// record order so group indices survive the trip.
    pub fn translate_record(
        &mut self,
        graph: &mut ModelGraph,
        record: &FlatRecord,
    ) -> Result<Handle> {
        let schema = record.schema();
        let handle = graph.add_object(record.object_type());

        for field in schema.fields {
            let value = record.value(field.index)?;
            if value.is_absent() {
                continue;
            }
            if field.is_reference() {
                let Some(name) = value.text() else {
                    continue;
                };
                match self.lookup(graph, field.target_types, name) {
                    Some(target) => {
                        let object = graph.object_mut(handle).expect("object was just added");
                        object.set_reference(field.index, target)?;
                    }
                    None => {
                        let object_name = record.name().unwrap_or_default().to_owned();
                        tracing::debug!(
                            object_type = %record.object_type(),
                            object_name,
                            target = name,
                            "reference target not translated yet; parked for a second pass"
                        );
                        self.warnings.push(TranslationWarning::UnresolvedReference {
                            object_type: record.object_type(),
                            object_name,
                            field: FieldRef::Scalar(field.index),
                            target_name: name.to_owned(),
                        });
                        self.pending.push(PendingReference {
                            object: handle,
                            field: FieldRef::Scalar(field.index),
                            target_types: field.target_types,
                            target_name: name.to_owned(),
                        });
                    }
                }
            } else {
                let copied = match (value, field.unit_hint) {
                    (Value::Real(v), Some(hint)) => Value::Real(normalize_to_base_scale(*v, hint)),
                    _ => value.clone(),
                };
                let object = graph.object_mut(handle).expect("object was just added");
                object.set_value(field.index, copied)?;
            }
        }

        for (group, cells) in record.extensible_groups().enumerate() {
            let mut model_cells = Vec::with_capacity(cells.len());
            for (field, cell) in cells.iter().enumerate() {
                let is_reference =
                    schema.group_field(field).is_some_and(|f| f.is_reference());
                let name = cell.text();
                match (is_reference, name) {
                    (true, Some(name)) => {
                        let target_types = schema
                            .group_field(field)
                            .map(|f| f.target_types)
                            .unwrap_or_default();
                        match self.lookup(graph, target_types, name) {
                            Some(target) => model_cells.push(GroupCell::Reference(target)),
                            None => {
                                let object_name = record.name().unwrap_or_default().to_owned();
                                self.warnings.push(TranslationWarning::UnresolvedReference {
                                    object_type: record.object_type(),
                                    object_name,
                                    field: FieldRef::Group { group, field },
                                    target_name: name.to_owned(),
                                });
                                self.pending.push(PendingReference {
                                    object: handle,
                                    field: FieldRef::Group { group, field },
                                    target_types,
                                    target_name: name.to_owned(),
                                });
                                model_cells.push(GroupCell::Value(Value::Absent));
                            }
                        }
                    }
                    _ => model_cells.push(GroupCell::Value(cell.clone())),
                }
            }
            let object = graph.object_mut(handle).expect("object was just added");
            object.push_group(model_cells)?;
        }

        if let Some(adjust) = strategy_for(record.object_type()).reverse {
            let object = graph.object_mut(handle).expect("object was just added");
            adjust(object)?;
        }
        Ok(handle)
    }

    /// Translate a batch in its given order.
    pub fn translate_records(
        &mut self,
        graph: &mut ModelGraph,
        records: &[FlatRecord],
    ) -> Result<Vec<Handle>> {
        records
            .iter()
            .map(|record| self.translate_record(graph, record))
            .collect()
    }

    /// Second pass: retry every parked reference against the now-fuller
    /// graph. Returns how many resolved; the rest stay parked.
    pub fn resolve_pending(&mut self, graph: &mut ModelGraph) -> usize {
        let parked = std::mem::take(&mut self.pending);
        let mut resolved = 0;
        for reference in parked {
            if !graph.contains(reference.object) {
                continue;
            }
            let Some(target) = self.lookup(graph, reference.target_types, &reference.target_name)
            else {
                self.pending.push(reference);
                continue;
            };
            let object = graph
                .object_mut(reference.object)
                .expect("liveness checked above");
            let bound = match reference.field {
                FieldRef::Scalar(index) => object.set_reference(index, target).is_ok(),
                FieldRef::Group { group, field } => {
                    object.set_group_reference(group, field, target).is_ok()
                }
            };
            if bound {
                resolved += 1;
            }
        }
        resolved
    }
}
