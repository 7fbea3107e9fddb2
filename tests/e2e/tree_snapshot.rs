use skillmap::{Employee, Endorsement, build_taxonomy};

#[test]
fn test_tree_json_shape() {
    let employees = vec![
        Employee::new(1u64, "Sarah Chen", "Senior Frontend Developer")
            .with_skills(["React", "TypeScript"]),
        Employee::new(2u64, "Priya Patel", "Product Designer").with_skills(["Figma"]),
    ];
    let endorsements = vec![
        Endorsement::new("Figma", 2u64),
        Endorsement::new("Figma", 2u64),
        Endorsement::new("React", 1u64),
        Endorsement::new("Cobol", 1u64),
    ];
    let root = build_taxonomy(&employees, &endorsements);

    insta::assert_json_snapshot!(root, @r#"
    {
      "name": "All Skills",
      "employees": [
        "1",
        "2"
      ],
      "endorsement_count": 4,
      "children": [
        {
          "category": "design",
          "name": "Design",
          "employees": [
            "2"
          ],
          "endorsement_count": 2,
          "children": [
            {
              "label": "Figma",
              "category": "design",
              "employees": [
                "2"
              ],
              "endorsement_count": 2
            }
          ]
        },
        {
          "category": "technology",
          "name": "Technology",
          "employees": [
            "1"
          ],
          "endorsement_count": 1,
          "children": [
            {
              "label": "React",
              "category": "technology",
              "employees": [
                "1"
              ],
              "endorsement_count": 1
            },
            {
              "label": "TypeScript",
              "category": "technology",
              "employees": [
                "1"
              ],
              "endorsement_count": 0
            }
          ]
        }
      ]
    }
    "#);
}
