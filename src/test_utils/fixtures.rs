//! Test fixtures and data builders for consistent test data

use chrono::{DateTime, Local, TimeZone};

use crate::clock::FixedClock;
use crate::models::User;

/// Id produced for any user created at [`fixed_instant`]
pub const FIXED_USER_ID: &str = "user-20240309140507";

/// A fixed local instant: 2024-03-09 14:05:07
pub fn fixed_instant() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 3, 9, 14, 5, 7)
        .single()
        .expect("fixture instant is unambiguous")
}

/// A clock frozen at [`fixed_instant`]
pub fn fixed_clock() -> FixedClock {
    FixedClock::new(fixed_instant())
}

/// Creates a sample user stamped at [`fixed_instant`]
pub fn sample_user() -> User {
    User::with_clock("John Doe", "john@example.com", &fixed_clock())
}
