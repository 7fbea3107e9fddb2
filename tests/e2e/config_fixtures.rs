use skillmap::config::Config;
use skillmap::taxonomy::{CategoryTable, SkillClassifier, TableClassifier};
use skillmap::test_utils::{TestCase, run_table_tests};
use skillmap::SkillCategory;

use crate::common::fixture_path;

fn load(name: &str) -> skillmap::Result<Config> {
    let path = fixture_path(&format!("configs/{name}"));
    let raw = std::fs::read_to_string(path)?;
    Config::from_toml_str(&raw)
}

#[test]
fn test_search_settings_from_fixtures() -> Result<(), String> {
    let cases = vec![
        TestCase {
            name: "default",
            input: "default.toml",
            expected: (0.3, 0.5, 0.3, 8usize, "human".to_string()),
            should_panic: false,
        },
        TestCase {
            name: "tuned",
            input: "tuned.toml",
            expected: (0.1, 0.5, 0.3, 3usize, "json".to_string()),
            should_panic: false,
        },
    ];

    run_table_tests(cases, |name| {
        let config = load(name).unwrap();
        (
            config.search.threshold,
            config.search.name_boost,
            config.search.title_boost,
            config.search.max_results,
            config.output.format,
        )
    })
}

#[test]
fn test_tuned_classifier_table() {
    let config = load("tuned.toml").unwrap();
    assert!(config.classifier.normalize_labels);

    let classifier = TableClassifier::new(CategoryTable::from_config(&config.classifier));
    assert_eq!(classifier.classify("dbt"), SkillCategory::Analytics);
    assert_eq!(classifier.classify("  cobol "), SkillCategory::Finance);
    assert_eq!(classifier.classify("REACT"), SkillCategory::Technology);
    // Technology precedes Analytics in table order, so SQL stays there.
    assert_eq!(classifier.classify("SQL"), SkillCategory::Technology);
}

#[test]
fn test_invalid_fixture_is_rejected() {
    let err = load("invalid_threshold.toml").unwrap_err();
    assert_eq!(err.code(), "config");
    assert!(err.to_string().contains("search.threshold"));
}

#[test]
fn test_explicit_path_skips_discovery() {
    let root = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(root.path().join(".skillmap")).unwrap();
    std::fs::write(
        root.path().join(".skillmap/config.toml"),
        "[search]\nmax_results = 2\n",
    )
    .unwrap();

    let explicit = fixture_path("configs/default.toml");
    let config = Config::load(Some(explicit.as_path()), root.path()).unwrap();
    assert_eq!(config.search.max_results, 8);
}
