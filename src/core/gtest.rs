//! GoogleTest command-line helpers
//!
//! Filters use the `positive[-negative]` format where both parts are
//! `:`-separated lists of test names, e.g.
//! `Suite.testA:Suite.testB-Suite.testC`.

use crate::core::strings::{join, split_char};
use crate::error::FileError;
use std::path::Path;
use std::process::Command;

const FILTER_ARGUMENT: &str = "gtest_filter";
const LIST_TESTS_ARGUMENT: &str = "--gtest_list_tests";

/// Split a filter into its positive and negative parts.
///
/// ```
/// use rassist::core::gtest::split_filter;
///
/// assert_eq!(split_filter("*"), ("*".to_string(), String::new()));
/// assert_eq!(
///     split_filter("Foo.a-Bar.b:Baz.c"),
///     ("Foo.a".to_string(), "Bar.b:Baz.c".to_string())
/// );
/// ```
pub fn split_filter(filter: &str) -> (String, String) {
    match filter.split_once('-') {
        Some((positive, negative)) => (positive.to_string(), negative.to_string()),
        None => (filter.to_string(), String::new()),
    }
}

/// Merge new positive and negative entries into an existing filter.
///
/// An empty positive list becomes `*` so that a pure exclusion filter still
/// selects every other test.
pub fn merge_filter(positive: &str, negative: &str, existing: Option<&str>) -> String {
    let (existing_positive, existing_negative) = split_filter(existing.unwrap_or(""));

    let mut positive = merge_lists(&existing_positive, positive);
    let negative = merge_lists(&existing_negative, negative);

    if positive.is_empty() {
        positive.push('*');
    }

    if negative.is_empty() {
        positive
    } else {
        format!("{}-{}", positive, negative)
    }
}

/// Like [`merge_filter`], taking the existing filter from a
/// `--gtest_filter=` argument when present.
pub fn merge_filter_from_args<S: AsRef<str>>(positive: &str, negative: &str, args: &[S]) -> String {
    let existing = find_argument(FILTER_ARGUMENT, args);
    merge_filter(positive, negative, existing.as_deref())
}

fn merge_lists(first: &str, second: &str) -> String {
    let entries: Vec<String> = split_char(first, ':')
        .into_iter()
        .chain(split_char(second, ':'))
        .filter(|entry| !entry.is_empty())
        .collect();
    join(&entries, Some(":"))
}

/// Value of a `--name=value` argument.
pub fn find_argument<S: AsRef<str>>(name: &str, args: &[S]) -> Option<String> {
    let prefix = format!("--{}=", name);
    args.iter()
        .find_map(|arg| arg.as_ref().strip_prefix(&prefix).map(str::to_string))
}

/// Parse the output of `--gtest_list_tests` into `Suite.case` names.
pub fn parse_test_list(output: &str) -> Vec<String> {
    let mut tests = Vec::new();
    let mut suite = String::new();

    for line in output.lines() {
        // Parameterized tests append "  # GetParam() = ..." comments
        let line = match line.find('#') {
            Some(position) => &line[..position],
            None => line,
        };
        if line.trim().is_empty() {
            continue;
        }

        if line.starts_with(char::is_whitespace) {
            if !suite.is_empty() {
                tests.push(format!("{}{}", suite, line.trim()));
            }
        } else {
            suite = line.trim().to_string();
        }
    }
    tests
}

/// Run a GoogleTest executable with `--gtest_list_tests` and return the
/// names of its test cases.
pub fn get_test_list(executable: impl AsRef<Path>) -> Result<Vec<String>, FileError> {
    let executable = executable.as_ref();
    let output = Command::new(executable)
        .arg(LIST_TESTS_ARGUMENT)
        .output()
        .map_err(|source| FileError::Spawn {
            program: executable.display().to_string(),
            source,
        })?;

    if !output.status.success() {
        log::warn!(
            "'{}' exited with {} while listing tests",
            executable.display(),
            output.status
        );
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(parse_test_list(&stdout))
}
