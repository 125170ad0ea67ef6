//! Domain records

pub mod user;

pub use user::{generate_id, User, ID_PREFIX};
