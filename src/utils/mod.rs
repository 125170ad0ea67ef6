pub mod helpers;


pub use helpers::{average, format_numbers, greet, sum};
