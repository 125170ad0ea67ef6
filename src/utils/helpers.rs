//! Greeting and arithmetic helpers
//!
//! Pure functions over strings and integer slices. None of them can fail.

use crate::config::APP_NAME;

/// Returns a greeting message for the given name.
///
/// The name is inserted verbatim, without trimming or escaping.
pub fn greet(name: &str) -> String {
    format!("Hello, {name}! Welcome to {APP_NAME}.")
}

/// Sums the integers in a slice. An empty slice sums to 0.
pub fn sum(numbers: &[i64]) -> i64 {
    numbers.iter().sum()
}

/// Averages the integers in a slice. An empty slice averages to 0.0.
pub fn average(numbers: &[i64]) -> f64 {
    if numbers.is_empty() {
        return 0.0;
    }
    sum(numbers) as f64 / numbers.len() as f64
}

/// Renders a slice as `[1 2 3]`
pub fn format_numbers(numbers: &[i64]) -> String {
    let items: Vec<String> = numbers.iter().map(|n| n.to_string()).collect();
    format!("[{}]", items.join(" "))
}
