//! The Event aggregate.
//!
//! Every field is private; the aggregate only changes through the operations
//! below, each of which either succeeds completely or leaves the event as it
//! was. Time-sensitive operations take the current instant as a closure so the
//! aggregate never reads the wall clock itself.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::organizer::{Organizer, OrganizerId};
use crate::models::ticket::TicketType;
use crate::utils::error::{EventError, SchedulingViolation};

pub type EventId = i32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EventStatus {
    #[default]
    Draft,
    Published,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "Draft",
            EventStatus::Published => "Published",
        }
    }

    /// Draft → Published is the only transition. Publishing again is allowed
    /// and simply re-runs the publish checks.
    pub fn can_transition_to(&self, to: &EventStatus) -> bool {
        matches!(
            (self, to),
            (EventStatus::Draft, EventStatus::Published)
                | (EventStatus::Published, EventStatus::Published)
        )
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    id: EventId,
    title: String,
    description: String,
    starts: Option<DateTime<Utc>>,
    ends: Option<DateTime<Utc>>,
    status: EventStatus,
    organizers: Vec<Organizer>,
    ticket_types: Vec<TicketType>,
    capacity: u32,
}

impl Event {
    /// Creates a draft event, reporting every missing field at once.
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Result<Self, EventError> {
        let title = title.into();
        let description = description.into();

        validate_event_data(&title, &description)?;

        Ok(Self {
            id: 0,
            title,
            description,
            starts: None,
            ends: None,
            status: EventStatus::Draft,
            organizers: Vec::new(),
            ticket_types: Vec::new(),
            capacity: 0,
        })
    }

    pub fn id(&self) -> EventId {
        self.id
    }

    /// Identifiers are handed out by whatever stores the event.
    pub fn assign_id(&mut self, id: EventId) {
        self.id = id;
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn starts(&self) -> Option<DateTime<Utc>> {
        self.starts
    }

    pub fn ends(&self) -> Option<DateTime<Utc>> {
        self.ends
    }

    pub fn status(&self) -> EventStatus {
        self.status
    }

    pub fn is_published(&self) -> bool {
        self.status == EventStatus::Published
    }

    pub fn organizers(&self) -> &[Organizer] {
        &self.organizers
    }

    pub fn ticket_types(&self) -> &[TicketType] {
        &self.ticket_types
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Sets both ends of the schedule, replacing any previous one.
    ///
    /// `now` is called exactly once.
    pub fn schedule_event<F>(
        &mut self,
        starts: DateTime<Utc>,
        ends: DateTime<Utc>,
        now: F,
    ) -> Result<(), EventError>
    where
        F: FnOnce() -> DateTime<Utc>,
    {
        if starts < now() {
            return Err(EventError::InvalidSchedulingDates(
                SchedulingViolation::StartsInPast,
            ));
        }
        if starts > ends {
            return Err(EventError::InvalidSchedulingDates(
                SchedulingViolation::StartsAfterEnds,
            ));
        }

        self.starts = Some(starts);
        self.ends = Some(ends);
        debug!(event_id = self.id, %starts, %ends, "Event scheduled");
        Ok(())
    }

    /// Adding an organizer that is already a member does nothing.
    pub fn add_organizer(&mut self, organizer: Organizer) {
        if self.organizers.iter().any(|o| o.id == organizer.id) {
            return;
        }

        debug!(event_id = self.id, organizer_id = organizer.id, "Organizer added");
        self.organizers.push(organizer);
    }

    /// Removes an organizer. Unknown ids are ignored; removing the sole
    /// organizer is rejected.
    pub fn remove_organizer(&mut self, organizer_id: OrganizerId) -> Result<(), EventError> {
        let Some(index) = self.organizers.iter().position(|o| o.id == organizer_id) else {
            return Ok(());
        };

        if self.organizers.len() == 1 {
            return Err(EventError::EventRequiresOrganizer);
        }

        self.organizers.remove(index);
        debug!(event_id = self.id, organizer_id, "Organizer removed");
        Ok(())
    }

    /// Ticket types already added are not re-checked against the new value.
    pub fn set_capacity(&mut self, maximum: u32) {
        self.capacity = maximum;
    }

    pub fn add_ticket_type(&mut self, ticket_type: TicketType) -> Result<(), EventError> {
        if ticket_type.quantity > self.capacity {
            return Err(EventError::CapacityExceededByTicketType {
                quantity: ticket_type.quantity,
                capacity: self.capacity,
            });
        }

        debug!(
            event_id = self.id,
            quantity = ticket_type.quantity,
            expires = %ticket_type.expires,
            "Ticket type added"
        );
        self.ticket_types.push(ticket_type);
        Ok(())
    }

    /// Ticket types still on sale at `as_of`, in the order they were added.
    pub fn available_ticket_types(&self, as_of: DateTime<Utc>) -> Vec<TicketType> {
        self.ticket_types
            .iter()
            .filter(|tt| tt.is_available_at(as_of))
            .cloned()
            .collect()
    }

    /// Publishes the event.
    ///
    /// # Rules
    /// - Must be scheduled
    /// - Start must not be in the past according to `now`
    /// - Must offer at least one ticket type
    ///
    /// Only the first failing rule is reported.
    pub fn publish<F>(&mut self, now: F) -> Result<(), EventError>
    where
        F: FnOnce() -> DateTime<Utc>,
    {
        let starts = self
            .starts
            .ok_or(EventError::UnscheduledEventCannotBePublished)?;
        if starts < now() {
            return Err(EventError::ScheduledInPastCannotBePublished);
        }
        if self.ticket_types.is_empty() {
            return Err(EventError::RequiresTicketsToPublish);
        }

        debug_assert!(self.status.can_transition_to(&EventStatus::Published));
        self.status = EventStatus::Published;
        debug!(event_id = self.id, "Event published");
        Ok(())
    }
}

fn validate_event_data(title: &str, description: &str) -> Result<(), EventError> {
    let mut errors = Vec::new();

    if title.is_empty() {
        errors.push("Title is required".to_string());
    }
    if description.is_empty() {
        errors.push("Description is required".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(EventError::Validation(errors))
    }
}
