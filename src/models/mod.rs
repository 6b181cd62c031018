pub mod event;
pub mod organizer;
pub mod ticket;

pub use event::{Event, EventId, EventStatus};
pub use organizer::{Organizer, OrganizerId};
pub use ticket::TicketType;
