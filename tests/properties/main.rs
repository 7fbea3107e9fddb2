//! Property tests for taxonomy aggregation, fuzzy scoring, search and
//! dropdown navigation.

mod navigation_props;
mod search_props;
mod taxonomy_props;

use proptest::prelude::*;
use skillmap::{Employee, Endorsement};

/// Labels drawn from the built-in table, unknown labels and case variants.
const LABELS: &[&str] = &[
    "React",
    "react",
    "TypeScript",
    "Figma",
    "SQL",
    "Tableau",
    "SEO",
    "Leadership",
    "Budgeting",
    "Basket Weaving",
    "Juggling",
    "Rust",
];

/// Endorsed labels include some nobody can hold.
const ENDORSED: &[&str] = &["React", "TypeScript", "Figma", "Rust", "Cobol", "Fortran"];

pub fn arb_employees() -> impl Strategy<Value = Vec<Employee>> {
    prop::collection::vec(
        (
            "[A-Za-z ]{0,16}",
            "[A-Za-z ]{0,24}",
            prop::collection::vec(prop::sample::select(LABELS), 0..5),
        ),
        0..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(idx, (name, title, skills))| {
                Employee::new(idx as u64, name, title).with_skills(skills)
            })
            .collect()
    })
}

pub fn arb_endorsements(max_employee: u64) -> impl Strategy<Value = Vec<Endorsement>> {
    prop::collection::vec(
        (prop::sample::select(ENDORSED), 0..=max_employee),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(skill, employee)| Endorsement::new(skill, employee))
            .collect()
    })
}

pub fn arb_snapshot() -> impl Strategy<Value = (Vec<Employee>, Vec<Endorsement>)> {
    arb_employees().prop_flat_map(|employees| {
        let max = employees.len() as u64;
        (Just(employees), arb_endorsements(max))
    })
}
