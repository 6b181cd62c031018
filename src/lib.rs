//! Event aggregate for Bonfire Events: creation, scheduling, organizers,
//! ticket inventory and publication.

pub mod config;
pub mod models;
pub mod repository;
pub mod services;
pub mod utils;

pub use models::{Event, EventId, EventStatus, Organizer, OrganizerId, TicketType};
pub use repository::{EventRepository, InMemoryEventRepository};
pub use services::{AuthenticationAdapter, CreateEvent, OrganizersAdapter};
pub use utils::error::{
    AdapterError, CreateEventError, EventError, RepositoryError, SchedulingViolation,
};
