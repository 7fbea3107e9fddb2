use skillmap::search::{ResultKind, SearchResult, search};
use skillmap::taxonomy::SkillDirectory;
use skillmap::{Employee, EmployeeId, Endorsement, SkillCategory, Snapshot, build_taxonomy};

use crate::common::fixture_path;

fn sarah() -> Vec<Employee> {
    vec![
        Employee::new(1u64, "Sarah Chen", "Senior Frontend Developer")
            .with_skills(["React", "TypeScript"]),
    ]
}

#[test]
fn test_scenario_single_employee_no_endorsements() {
    let root = build_taxonomy(&sarah(), &[]);

    assert_eq!(root.children.len(), 1);
    let technology = &root.children[0];
    assert_eq!(technology.name, "Technology");
    assert_eq!(technology.category, SkillCategory::Technology);

    let labels: Vec<&str> = technology.children.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["React", "TypeScript"]);
    for skill in &technology.children {
        assert_eq!(
            skill.employees.iter().collect::<Vec<_>>(),
            vec![&EmployeeId::from(1u64)]
        );
        assert_eq!(skill.endorsement_count, 0);
    }
}

#[test]
fn test_scenario_repeated_endorsements() {
    let endorsements = vec![Endorsement::new("React", 1u64), Endorsement::new("React", 1u64)];
    let root = build_taxonomy(&sarah(), &endorsements);

    assert_eq!(root.skill("React").map(|s| s.endorsement_count), Some(2));
    assert_eq!(root.skill("TypeScript").map(|s| s.endorsement_count), Some(0));
    assert_eq!(
        root.category(SkillCategory::Technology).map(|c| c.endorsement_count),
        Some(2)
    );
    assert_eq!(root.endorsement_count, 2);
}

#[test]
fn test_scenario_name_substring_search() {
    let employees = sarah();
    let results = search(&employees, "sar");

    assert_eq!(results.len(), 1);
    let SearchResult::Employee { employee, score } = results[0] else {
        panic!("expected an employee match, got {:?}", results[0]);
    };
    assert_eq!(employee.id, EmployeeId::from(1u64));
    assert!((score - 1.5).abs() < 1e-9);
}

#[test]
fn test_scenario_no_match_search() {
    assert!(search(&sarah(), "xyz").is_empty());
}

#[test]
fn test_fixture_snapshot_loads_numeric_ids() {
    let snapshot = Snapshot::load(&fixture_path("employees.json")).unwrap();
    assert_eq!(snapshot.employees.len(), 8);
    assert_eq!(snapshot.endorsements.len(), 10);
    assert!(snapshot.employees[7].skills.is_empty());
    assert_eq!(
        snapshot.employee(&EmployeeId::from(4u64)).map(|e| e.name.as_str()),
        Some("David Kim")
    );
}

#[test]
fn test_directory_over_fixture_snapshot() {
    let snapshot = Snapshot::load(&fixture_path("employees.json")).unwrap();
    let mut directory = SkillDirectory::new(snapshot);

    let root = directory.tree();
    assert_eq!(root.employees.len(), 8);
    assert_eq!(root.orphaned_endorsements(), 1);
    let order: Vec<SkillCategory> = root.children.iter().map(|c| c.category).collect();
    assert_eq!(
        order,
        vec![
            SkillCategory::Technology,
            SkillCategory::Management,
            SkillCategory::Design,
            SkillCategory::Finance,
            SkillCategory::Analytics,
            SkillCategory::Marketing,
        ]
    );

    let holders: Vec<&str> = directory
        .holders("Leadership")
        .into_iter()
        .map(|e| e.name.as_str())
        .collect();
    assert_eq!(holders, vec!["Elena Rodriguez", "Aisha Okafor"]);

    directory.replace_snapshot(Snapshot::default());
    assert!(directory.tree().is_empty());
}

#[test]
fn test_mixed_search_over_fixture() {
    let snapshot = Snapshot::load(&fixture_path("employees.json")).unwrap();
    let results = search(&snapshot.employees, "data");

    // David Kim's title is an exact substring; skill "Data Analysis" too.
    assert_eq!(results[0].kind(), ResultKind::Employee);
    assert_eq!(results[0].display(), "David Kim");
    assert!((results[0].score() - 1.3).abs() < 1e-9);
    assert!(
        results
            .iter()
            .any(|r| r.kind() == ResultKind::Skill && r.display() == "Data Analysis")
    );
}
