use chrono::{Duration, Utc};
use dotenvy::dotenv;
use std::process::ExitCode;

use bonfire_events::config::{init_tracing, Config};
use bonfire_events::{
    AdapterError, AuthenticationAdapter, CreateEvent, EventRepository, InMemoryEventRepository,
    Organizer, OrganizersAdapter, TicketType,
};

/// Treats the configured identity as the logged-in user.
struct LocalAuthentication {
    user: String,
}

impl AuthenticationAdapter for LocalAuthentication {
    fn current_user(&self) -> Result<String, AdapterError> {
        Ok(self.user.clone())
    }
}

struct LocalOrganizers;

impl OrganizersAdapter for LocalOrganizers {
    fn organizer_details(&self, identity: &str) -> Result<Organizer, AdapterError> {
        Ok(Organizer::new(1, identity))
    }
}

fn main() -> ExitCode {
    dotenv().ok();
    let config = Config::from_env();
    init_tracing(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Walkthrough failed");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let repository = InMemoryEventRepository::new();
    let service = CreateEvent::new(
        LocalAuthentication {
            user: config.current_user.clone(),
        },
        LocalOrganizers,
    );

    let mut event = service.execute("Rust meet-up", "Monthly meet-up for enthusiasts.")?;

    let starts = Utc::now() + Duration::days(7);
    event.schedule_event(starts, starts + Duration::hours(2), Utc::now)?;
    event.set_capacity(50);
    event.add_ticket_type(TicketType::new(50, starts))?;
    event.publish(Utc::now)?;

    let id = repository.save(event)?;
    let stored = repository.find(id)?;
    tracing::info!(
        event_id = id,
        status = %stored.status(),
        snapshot = %serde_json::to_string(&stored)?,
        "Event published"
    );

    Ok(())
}
