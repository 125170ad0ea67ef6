pub mod app;
pub mod clock;
pub mod config;
pub mod logging;
pub mod models;
pub mod test_utils;
pub mod utils;

pub use app::{OutputFormat, Report};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::Config;
pub use models::User;
