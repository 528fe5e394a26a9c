use bem_schema::ObjectType;

use crate::event::GraphEvent;
use crate::handle::Handle;
use crate::object::ModelObject;

struct Slot {
    generation: u32,
    object: Option<ModelObject>,
}

type Subscriber = Box<dyn FnMut(&GraphEvent)>;

/// Owning container of the model object graph.
///
/// A generational arena: every object lives in a slot, and the handle issued
/// at creation pairs the slot index with the slot's generation. Removal
/// bumps the generation, so stale handles resolve to `None` instead of a
/// recycled occupant. The graph is exclusively owned by one logical session
/// and performs no locking.
#[derive(Default)]
pub struct ModelGraph {
    slots: Vec<Slot>,
    free: Vec<u32>,
    // Live handles in insertion order; this is the iteration order every
    // batch operation sees.
    sequence: Vec<Handle>,
    subscribers: Vec<Subscriber>,
}

impl ModelGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty object of `object_type` and return its handle.
    pub fn add_object(&mut self, object_type: ObjectType) -> Handle {
        let handle = match self.free.pop() {
            Some(index) => {
                let slot = &mut self.slots[index as usize];
                Handle { index, generation: slot.generation }
            }
            None => {
                let index = u32::try_from(self.slots.len()).expect("graph slot overflow");
                self.slots.push(Slot { generation: 0, object: None });
                Handle { index, generation: 0 }
            }
        };
        self.slots[handle.index as usize].object = Some(ModelObject::new(handle, object_type));
        self.sequence.push(handle);
        self.publish(GraphEvent::ObjectAdded { handle, object_type });
        handle
    }

    /// Remove the object behind `handle`. False when the handle is dead.
    pub fn remove_object(&mut self, handle: Handle) -> bool {
        if !self.contains(handle) {
            return false;
        }
        let slot = &mut self.slots[handle.index as usize];
        let object = slot.object.take().expect("live slot has an object");
        slot.generation += 1;
        self.free.push(handle.index);
        self.sequence.retain(|h| *h != handle);
        self.publish(GraphEvent::ObjectRemoved {
            handle,
            object_type: object.object_type(),
        });
        true
    }

    pub fn contains(&self, handle: Handle) -> bool {
        self.slots
            .get(handle.index as usize)
            .is_some_and(|slot| slot.generation == handle.generation && slot.object.is_some())
    }

    pub fn object(&self, handle: Handle) -> Option<&ModelObject> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation == handle.generation { slot.object.as_ref() } else { None }
    }

    pub fn object_mut(&mut self, handle: Handle) -> Option<&mut ModelObject> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation == handle.generation { slot.object.as_mut() } else { None }
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Live handles in insertion order.
    pub fn handles(&self) -> impl Iterator<Item = Handle> + '_ {
        self.sequence.iter().copied()
    }

    /// Live objects in insertion order.
    pub fn objects(&self) -> impl Iterator<Item = &ModelObject> {
        self.sequence.iter().map(|h| self.object(*h).expect("sequence holds live handles"))
    }

    /// Live objects of one type, in insertion order.
    pub fn objects_of_type(&self, object_type: ObjectType) -> impl Iterator<Item = &ModelObject> {
        self.objects().filter(move |o| o.object_type() == object_type)
    }

    /// Register a mutation subscriber. Subscribers see every add/remove
    /// published after registration, in mutation order.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&GraphEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn publish(&mut self, event: GraphEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }
}

impl std::fmt::Debug for ModelGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelGraph")
            .field("len", &self.len())
            .field("slots", &self.slots.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}
