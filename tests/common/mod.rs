//! Helpers shared by the integration suites.

#![allow(dead_code)]

use std::path::PathBuf;

use assert_cmd::Command;

pub fn fixture_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(relative)
}

/// `skm` with an isolated environment and the shared employee snapshot.
pub fn skm() -> Command {
    let mut cmd = Command::cargo_bin("skm").unwrap();
    for key in [
        "SKM_CONFIG",
        "SKM_DATA",
        "SKM_ROBOT",
        "SKM_OUTPUT_FORMAT",
        "SKM_CLASSIFIER_NORMALIZE",
        "SKM_SEARCH_THRESHOLD",
        "SKM_SEARCH_NAME_BOOST",
        "SKM_SEARCH_TITLE_BOOST",
        "SKM_SEARCH_MAX_RESULTS",
        "RUST_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd.env("SKM_DATA", fixture_path("employees.json"))
        .env("SKM_CONFIG", fixture_path("configs/default.toml"))
        .env("NO_COLOR", "1");
    cmd
}
