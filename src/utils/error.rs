use thiserror::Error;
use tracing::{error, warn};

use crate::models::EventId;

/// Why a schedule was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SchedulingViolation {
    #[error("start is in the past")]
    StartsInPast,

    #[error("start is after end")]
    StartsAfterEnds,
}

/// Business rule violations raised by the [`Event`](crate::models::Event) aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// Every field-level violation found while constructing an event.
    #[error("Validation error: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("Invalid scheduling dates: {0}")]
    InvalidSchedulingDates(SchedulingViolation),

    #[error("An event requires at least one organizer")]
    EventRequiresOrganizer,

    #[error("Ticket type quantity {quantity} exceeds event capacity {capacity}")]
    CapacityExceededByTicketType { quantity: u32, capacity: u32 },

    #[error("Unscheduled events cannot be published")]
    UnscheduledEventCannotBePublished,

    #[error("Events scheduled in the past cannot be published")]
    ScheduledInPastCannotBePublished,

    #[error("An event requires tickets to be published")]
    RequiresTicketsToPublish,
}

impl EventError {
    pub fn code(&self) -> &'static str {
        match self {
            EventError::Validation(_) => "VALIDATION_ERROR",
            EventError::InvalidSchedulingDates(_) => "INVALID_SCHEDULING_DATES",
            EventError::EventRequiresOrganizer => "EVENT_REQUIRES_ORGANIZER",
            EventError::CapacityExceededByTicketType { .. } => "CAPACITY_EXCEEDED_BY_TICKET_TYPE",
            EventError::UnscheduledEventCannotBePublished => "UNSCHEDULED_EVENT_CANNOT_BE_PUBLISHED",
            EventError::ScheduledInPastCannotBePublished => "SCHEDULED_IN_PAST_CANNOT_BE_PUBLISHED",
            EventError::RequiresTicketsToPublish => "REQUIRES_TICKETS_TO_PUBLISH",
        }
    }

    /// Field-level messages for a failed construction, empty for every other rule.
    pub fn validation_errors(&self) -> &[String] {
        match self {
            EventError::Validation(errors) => errors,
            _ => &[],
        }
    }

    pub fn log(&self) {
        match self {
            EventError::Validation(errors) => {
                warn!(code = self.code(), errors = ?errors, "Event validation failed");
            }
            _ => {
                warn!(code = self.code(), message = %self, "Event rule violated");
            }
        }
    }
}

/// Opaque failure reported by an authentication or organizer lookup collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct AdapterError(pub String);

impl AdapterError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

#[derive(Debug, Error)]
pub enum CreateEventError {
    #[error("Authentication error: {0}")]
    Authentication(AdapterError),

    #[error("Organizer lookup error: {0}")]
    OrganizerLookup(AdapterError),

    #[error(transparent)]
    Event(#[from] EventError),
}

impl CreateEventError {
    pub fn code(&self) -> &'static str {
        match self {
            CreateEventError::Authentication(_) => "AUTH_ERROR",
            CreateEventError::OrganizerLookup(_) => "ORGANIZER_LOOKUP_ERROR",
            CreateEventError::Event(e) => e.code(),
        }
    }

    pub fn log(&self) {
        match self {
            CreateEventError::Authentication(e) | CreateEventError::OrganizerLookup(e) => {
                error!(code = self.code(), error = %e, "Event creation failed");
            }
            CreateEventError::Event(e) => e.log(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Event with id '{0}' was not found")]
    NotFound(EventId),

    #[error("Repository unavailable: {0}")]
    Unavailable(String),

    #[error("No event ids left to assign")]
    IdsExhausted,
}

impl RepositoryError {
    pub fn code(&self) -> &'static str {
        match self {
            RepositoryError::NotFound(_) => "NOT_FOUND",
            RepositoryError::Unavailable(_) => "REPOSITORY_UNAVAILABLE",
            RepositoryError::IdsExhausted => "IDS_EXHAUSTED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_every_violation() {
        let err = EventError::Validation(vec![
            "Title is required".to_string(),
            "Description is required".to_string(),
        ]);

        assert_eq!(
            err.to_string(),
            "Validation error: Title is required, Description is required"
        );
        assert_eq!(err.validation_errors().len(), 2);
    }

    #[test]
    fn test_non_validation_errors_have_no_field_messages() {
        assert!(EventError::EventRequiresOrganizer
            .validation_errors()
            .is_empty());
    }

    #[test]
    fn test_create_event_error_delegates_code() {
        let err = CreateEventError::from(EventError::RequiresTicketsToPublish);
        assert_eq!(err.code(), "REQUIRES_TICKETS_TO_PUBLISH");

        let err = CreateEventError::Authentication(AdapterError::new("no session"));
        assert_eq!(err.code(), "AUTH_ERROR");
        assert_eq!(err.to_string(), "Authentication error: no session");
    }

    #[test]
    fn test_scheduling_violation_message() {
        let err = EventError::InvalidSchedulingDates(SchedulingViolation::StartsAfterEnds);
        assert_eq!(err.to_string(), "Invalid scheduling dates: start is after end");
    }
}
