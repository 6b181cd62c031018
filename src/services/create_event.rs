use tracing::info;

use crate::models::{Event, Organizer};
use crate::utils::error::{AdapterError, CreateEventError};

/// Resolves who is making the current request.
pub trait AuthenticationAdapter {
    fn current_user(&self) -> Result<String, AdapterError>;
}

/// Resolves an authenticated identity to the organizer it acts as.
pub trait OrganizersAdapter {
    fn organizer_details(&self, identity: &str) -> Result<Organizer, AdapterError>;
}

/// Creates draft events on behalf of the authenticated organizer.
pub struct CreateEvent<A, O> {
    auth: A,
    organizers: O,
}

impl<A, O> CreateEvent<A, O>
where
    A: AuthenticationAdapter,
    O: OrganizersAdapter,
{
    pub fn new(auth: A, organizers: O) -> Self {
        Self { auth, organizers }
    }

    /// Builds the event and makes the current user its first organizer.
    pub fn execute(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Event, CreateEventError> {
        let result = self.create(title.into(), description.into());
        if let Err(e) = &result {
            e.log();
        }
        result
    }

    fn create(&self, title: String, description: String) -> Result<Event, CreateEventError> {
        let identity = self
            .auth
            .current_user()
            .map_err(CreateEventError::Authentication)?;
        let organizer = self
            .organizers
            .organizer_details(&identity)
            .map_err(CreateEventError::OrganizerLookup)?;

        let mut event = Event::new(title, description)?;
        info!(
            identity = %identity,
            organizer_id = organizer.id,
            title = %event.title(),
            "Draft event created"
        );
        event.add_organizer(organizer);

        Ok(event)
    }
}

impl<T: AuthenticationAdapter + ?Sized> AuthenticationAdapter for &T {
    fn current_user(&self) -> Result<String, AdapterError> {
        (**self).current_user()
    }
}

impl<T: OrganizersAdapter + ?Sized> OrganizersAdapter for &T {
    fn organizer_details(&self, identity: &str) -> Result<Organizer, AdapterError> {
        (**self).organizer_details(identity)
    }
}
