use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::clock::{Clock, SystemClock};

pub const ID_PREFIX: &str = "user-";

/// Layout of the timestamp part of a user id: `YYYYMMDDHHMMSS`
const ID_TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// A named user with a generated identifier and creation time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Local>,
}

impl User {
    /// Creates a user stamped with the system clock.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::with_clock(name, email, &SystemClock)
    }

    /// Creates a user stamped with the given clock.
    ///
    /// The id and `created_at` come from one clock reading, so the id always
    /// matches the creation time to the second. Ids only have second
    /// resolution: users created within the same second share an id.
    pub fn with_clock(
        name: impl Into<String>,
        email: impl Into<String>,
        clock: &dyn Clock,
    ) -> Self {
        let created_at = clock.now();
        Self {
            id: generate_id(&created_at),
            name: name.into(),
            email: email.into(),
            created_at,
        }
    }
}

/// Builds a user id from a timestamp: `user-YYYYMMDDHHMMSS`
pub fn generate_id(now: &DateTime<Local>) -> String {
    format!("{ID_PREFIX}{}", now.format(ID_TIMESTAMP_FORMAT))
}
