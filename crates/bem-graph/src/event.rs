use bem_schema::ObjectType;
use serde::{Deserialize, Serialize};

use crate::handle::Handle;

/// Graph mutation notification.
///
/// Published to subscribers registered on the graph; this is the whole
/// interface an outer presentation layer needs to refresh on add/remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GraphEvent {
    ObjectAdded { handle: Handle, object_type: ObjectType },
    ObjectRemoved { handle: Handle, object_type: ObjectType },
}
