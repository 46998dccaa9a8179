//! Utility helpers shared across integration tests.

use assert_cmd::Command;

/// Build a `Vec<String>` from a list of string slices.
///
/// This macro is primarily used in tests to reduce boilerplate when
/// constructing example documents or other collections of lines.
macro_rules! lines_vec {
    ($($line:expr),* $(,)?) => {
        vec![$($line.to_string()),*]
    };
}

/// Run the `mdtocsync` binary with the given arguments and empty stdin.
///
/// # Panics
/// Panics if the binary cannot be located or fails to run.
pub fn run_cli_with_args(args: &[&str]) -> std::process::Output {
    Command::cargo_bin("mdtocsync")
        .expect("failed to create cargo command for mdtocsync")
        .args(args)
        .write_stdin("")
        .output()
        .expect("failed to run command")
}
