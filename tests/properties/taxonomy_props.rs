use std::collections::HashSet;

use proptest::prelude::*;
use skillmap::build_taxonomy;

use crate::arb_snapshot;

proptest! {
    #[test]
    fn test_root_keeps_every_employee((employees, endorsements) in arb_snapshot()) {
        let root = build_taxonomy(&employees, &endorsements);
        prop_assert_eq!(root.employees.len(), employees.len());
        prop_assert_eq!(root.endorsement_count, endorsements.len() as u64);
    }

    #[test]
    fn test_orphaned_endorsements_only_count_at_root((employees, endorsements) in arb_snapshot()) {
        let root = build_taxonomy(&employees, &endorsements);
        let held: HashSet<&str> = employees
            .iter()
            .flat_map(|e| e.skills.iter().map(String::as_str))
            .collect();
        let orphaned = endorsements
            .iter()
            .filter(|e| !held.contains(e.skill.as_str()))
            .count() as u64;

        let category_sum: u64 = root.children.iter().map(|c| c.endorsement_count).sum();
        prop_assert_eq!(category_sum, root.endorsement_count - orphaned);
        prop_assert_eq!(root.orphaned_endorsements(), orphaned);
    }

    #[test]
    fn test_category_members_are_union_of_children((employees, endorsements) in arb_snapshot()) {
        let root = build_taxonomy(&employees, &endorsements);
        for category in &root.children {
            let union: HashSet<_> = category
                .children
                .iter()
                .flat_map(|s| s.employees.iter())
                .collect();
            let members: HashSet<_> = category.employees.iter().collect();
            prop_assert_eq!(members, union);
            prop_assert_eq!(
                category.endorsement_count,
                category.children.iter().map(|s| s.endorsement_count).sum::<u64>()
            );
        }
    }

    #[test]
    fn test_nodes_sorted_by_endorsements((employees, endorsements) in arb_snapshot()) {
        let root = build_taxonomy(&employees, &endorsements);
        prop_assert!(root
            .children
            .windows(2)
            .all(|w| w[0].endorsement_count >= w[1].endorsement_count));
        for category in &root.children {
            prop_assert!(category
                .children
                .windows(2)
                .all(|w| w[0].endorsement_count >= w[1].endorsement_count));
            prop_assert!(category.children.iter().all(|s| s.category == category.category));
        }
    }

    #[test]
    fn test_every_held_label_has_exactly_one_node((employees, endorsements) in arb_snapshot()) {
        let root = build_taxonomy(&employees, &endorsements);
        let held: HashSet<&str> = employees
            .iter()
            .flat_map(|e| e.skills.iter().map(String::as_str))
            .collect();
        prop_assert_eq!(root.skill_count(), held.len());
        for label in held {
            prop_assert!(root.skill(label).is_some());
        }
    }

    #[test]
    fn test_build_is_deterministic((employees, endorsements) in arb_snapshot()) {
        prop_assert_eq!(
            build_taxonomy(&employees, &endorsements),
            build_taxonomy(&employees, &endorsements)
        );
    }
}
