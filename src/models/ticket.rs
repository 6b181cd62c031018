use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketType {
    pub quantity: u32,
    pub expires: DateTime<Utc>,
}

impl TicketType {
    pub fn new(quantity: u32, expires: DateTime<Utc>) -> Self {
        Self { quantity, expires }
    }

    /// A ticket type stays on sale until the instant it expires.
    pub fn is_available_at(&self, as_of: DateTime<Utc>) -> bool {
        self.expires > as_of
    }
}
