use std::collections::BTreeMap;
use std::sync::RwLock;

use tracing::debug;

use crate::models::{Event, EventId};
use crate::utils::error::RepositoryError;

/// Lookup contract the API layer uses to load events.
pub trait EventRepository {
    fn find(&self, id: EventId) -> Result<Event, RepositoryError>;
}

/// Keeps events in memory. Loaded events are copies; callers save them back
/// after mutating.
#[derive(Debug, Default)]
pub struct InMemoryEventRepository {
    events: RwLock<BTreeMap<EventId, Event>>,
}

impl InMemoryEventRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the event, assigning the next free id when it has none yet.
    pub fn save(&self, mut event: Event) -> Result<EventId, RepositoryError> {
        let mut events = self
            .events
            .write()
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;

        if event.id() == 0 {
            let next = events
                .keys()
                .next_back()
                .map_or(Some(1), |last| (*last).max(0).checked_add(1))
                .ok_or(RepositoryError::IdsExhausted)?;
            event.assign_id(next);
        }

        let id = event.id();
        events.insert(id, event);
        debug!(event_id = id, "Event saved");
        Ok(id)
    }
}

impl EventRepository for InMemoryEventRepository {
    fn find(&self, id: EventId) -> Result<Event, RepositoryError> {
        let events = self
            .events
            .read()
            .map_err(|e| RepositoryError::Unavailable(e.to_string()))?;

        events.get(&id).cloned().ok_or(RepositoryError::NotFound(id))
    }
}
