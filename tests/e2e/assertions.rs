//! Custom assertions for E2E testing

#![allow(dead_code)]

use super::CommandResult;

/// Assert that a command succeeded
pub fn assert_command_success(result: &CommandResult) {
    assert!(
        result.success(),
        "Command failed: {:?}\nstdout: {}\nstderr: {}",
        result.args(),
        result.stdout_string(),
        result.stderr_string()
    );
}

/// Assert that a command exited with a specific code
pub fn assert_command_exit_code(result: &CommandResult, expected_code: i32) {
    match result.exit_code() {
        Some(code) => assert_eq!(
            code,
            expected_code,
            "Command exited with code {} but expected {}\nstdout: {}\nstderr: {}",
            code,
            expected_code,
            result.stdout_string(),
            result.stderr_string()
        ),
        None => panic!(
            "Command was terminated by signal, expected exit code {}\nstdout: {}\nstderr: {}",
            expected_code,
            result.stdout_string(),
            result.stderr_string()
        ),
    }
}

/// Assert that stdout contains specific text
pub fn assert_stdout_contains(result: &CommandResult, expected: &str) {
    let stdout = result.stdout_string();
    assert!(
        stdout.contains(expected),
        "stdout does not contain '{expected}'\nActual stdout: {stdout}"
    );
}

/// Assert that stderr contains specific text
pub fn assert_stderr_contains(result: &CommandResult, expected: &str) {
    let stderr = result.stderr_string();
    assert!(
        stderr.contains(expected),
        "stderr does not contain '{expected}'\nActual stderr: {stderr}"
    );
}

/// Assert that stdout does not contain specific text
pub fn assert_stdout_not_contains(result: &CommandResult, unexpected: &str) {
    let stdout = result.stdout_string();
    assert!(
        !stdout.contains(unexpected),
        "stdout unexpectedly contains '{unexpected}'\nActual stdout: {stdout}"
    );
}

/// Assert that stdout is exactly the given lines
pub fn assert_stdout_lines(result: &CommandResult, expected: &[&str]) {
    let stdout = result.stdout_string();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines, expected, "Actual stdout: {stdout}");
}
