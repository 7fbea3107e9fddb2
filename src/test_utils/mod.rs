//! Shared test utilities for skillmap.

pub mod fixtures;
pub mod logging;

/// Table-driven test case structure.
#[derive(Debug, Clone)]
pub struct TestCase<I, E> {
    pub name: &'static str,
    pub input: I,
    pub expected: E,
    pub should_panic: bool,
}

/// Run table-driven tests, stopping at the first mismatch.
///
/// # Errors
///
/// Returns a description of the first case whose outcome differs from its
/// expectation.
pub fn run_table_tests<I, E, F>(cases: Vec<TestCase<I, E>>, test_fn: F) -> Result<(), String>
where
    I: std::fmt::Debug + Clone + std::panic::RefUnwindSafe,
    E: std::fmt::Debug + PartialEq,
    F: Fn(I) -> E + std::panic::RefUnwindSafe,
{
    for case in cases {
        let outcome = std::panic::catch_unwind(|| test_fn(case.input.clone()));

        match (outcome, case.should_panic) {
            (Err(_), true) => {}
            (Ok(_), true) => return Err(format!("case '{}' expected a panic", case.name)),
            (Err(_), false) => return Err(format!("case '{}' panicked", case.name)),
            (Ok(actual), false) if actual != case.expected => {
                return Err(format!(
                    "case '{}' with input {:?}: expected {:?}, got {:?}",
                    case.name, case.input, case.expected, actual
                ));
            }
            (Ok(_), false) => {}
        }
    }
    Ok(())
}
