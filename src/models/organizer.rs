use serde::{Deserialize, Serialize};

pub type OrganizerId = i32;

/// A person allowed to manage an event. Membership is keyed on `id` alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizer {
    pub id: OrganizerId,
    pub display_name: String,
}

impl Organizer {
    pub fn new(id: OrganizerId, display_name: impl Into<String>) -> Self {
        Self {
            id,
            display_name: display_name.into(),
        }
    }
}
